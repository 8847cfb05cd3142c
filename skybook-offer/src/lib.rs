pub mod data;
pub mod generator;

pub use data::{airport_city, Airport, AIRLINES, AIRPORTS, POPULAR_DESTINATIONS};
pub use generator::{OfferError, OfferGenerator};
