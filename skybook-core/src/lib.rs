pub mod booking;
pub mod flight;
pub mod search;
pub mod user;
pub mod validation;

pub use booking::{Booking, BookingStatus, Gender, Passenger};
pub use flight::{CabinClass, FlightOffer, ScheduleStop};
pub use search::{SearchParams, TripType};
pub use user::User;
pub use validation::{
    validate_passenger, validate_passengers, validate_payment, CardDetails, PaymentDetails,
    PaymentMethod, ValidationIssue,
};
