pub mod payment;
pub mod quote;
pub mod wizard;

pub use payment::{
    MockPaymentGateway, PaymentError, PaymentGateway, PaymentOutcome, DECLINE_CARD_NUMBER,
};
pub use quote::BookingQuote;
pub use wizard::{BookingWizard, WizardError, WizardStep};
