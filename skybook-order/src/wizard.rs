use chrono::Utc;
use skybook_core::{
    validate_passengers, validate_payment, Booking, BookingStatus, FlightOffer, Passenger,
    PaymentDetails, ValidationIssue,
};

use crate::payment::{PaymentError, PaymentGateway, PaymentOutcome};
use crate::quote::BookingQuote;

/// Steps of the linear booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CollectingPassengers,
    Paying,
    Confirmed,
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WizardStep::CollectingPassengers => "COLLECTING_PASSENGERS",
            WizardStep::Paying => "PAYING",
            WizardStep::Confirmed => "CONFIRMED",
        };
        write!(f, "{label}")
    }
}

/// Drives the passenger -> payment -> confirmation flow for one selected
/// flight. Dropping the wizard mid-flow persists nothing; only the
/// booking returned by [`BookingWizard::confirm`] is durable.
pub struct BookingWizard {
    step: WizardStep,
    flight: FlightOffer,
    passenger_count: u32,
    passengers: Vec<Passenger>,
}

impl BookingWizard {
    pub fn begin(flight: FlightOffer, passenger_count: u32) -> Self {
        Self {
            step: WizardStep::CollectingPassengers,
            flight,
            passenger_count,
            passengers: Vec::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn flight(&self) -> &FlightOffer {
        &self.flight
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Replace the roster. Only allowed while collecting passengers.
    pub fn set_passengers(&mut self, passengers: Vec<Passenger>) -> Result<(), WizardError> {
        if self.step != WizardStep::CollectingPassengers {
            return Err(self.invalid_transition(WizardStep::CollectingPassengers));
        }
        self.passengers = passengers;
        Ok(())
    }

    /// Transition: CollectingPassengers -> Paying. Guard: full roster with
    /// names present on every row.
    pub fn proceed_to_payment(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::CollectingPassengers {
            return Err(self.invalid_transition(WizardStep::Paying));
        }
        let issues = validate_passengers(&self.passengers, self.passenger_count);
        if !issues.is_empty() {
            return Err(WizardError::Invalid(issues));
        }
        self.step = WizardStep::Paying;
        Ok(())
    }

    /// The only backward transition: Paying -> CollectingPassengers
    pub fn back_to_passengers(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::Paying {
            return Err(self.invalid_transition(WizardStep::CollectingPassengers));
        }
        self.step = WizardStep::CollectingPassengers;
        Ok(())
    }

    /// Transition: Paying -> Confirmed. Guard: payment details complete.
    /// Awaits the gateway round trip; a decline or timeout leaves the
    /// wizard in Paying so the caller can retry.
    pub async fn confirm(
        &mut self,
        user_id: &str,
        payment: &PaymentDetails,
        gateway: &dyn PaymentGateway,
        quote: BookingQuote,
    ) -> Result<Booking, WizardError> {
        if self.step != WizardStep::Paying {
            return Err(self.invalid_transition(WizardStep::Confirmed));
        }
        let issues = validate_payment(payment);
        if !issues.is_empty() {
            return Err(WizardError::Invalid(issues));
        }

        match gateway.charge(quote.total, payment).await? {
            PaymentOutcome::Declined { reason } => Err(WizardError::Declined(reason)),
            PaymentOutcome::Approved { reference } => {
                let now = Utc::now();
                let booking = Booking {
                    id: Booking::new_reference(now),
                    user_id: user_id.to_string(),
                    flight: self.flight.clone(),
                    passengers: self.passengers.clone(),
                    total_amount: quote.total,
                    status: BookingStatus::Confirmed,
                    created_at: now,
                    payment_method: payment.method.label().to_string(),
                };
                self.step = WizardStep::Confirmed;
                tracing::info!(
                    booking_id = %booking.id,
                    %reference,
                    total = booking.total_amount,
                    "Booking confirmed"
                );
                Ok(booking)
            }
        }
    }

    fn invalid_transition(&self, to: WizardStep) -> WizardError {
        WizardError::InvalidTransition {
            from: self.step.to_string(),
            to: to.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Invalid step transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Step guard failed with {} issue(s)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    #[error("Payment declined: {0}")]
    Declined(String),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}
