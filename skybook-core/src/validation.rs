use serde::{Deserialize, Serialize};
use skybook_shared::Masked;

use crate::booking::Passenger;

const CARD_NUMBER_MAX_DIGITS: usize = 19;
const CVV_MAX_DIGITS: usize = 4;

/// A single blocking problem with a form field. Step advancement is gated
/// on the issue list being empty; nothing here is ever thrown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    Wallet,
}

impl PaymentMethod {
    /// Label stored on the booking record
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn is_card_based(&self) -> bool {
        matches!(self, PaymentMethod::Card)
    }
}

/// Card fields as entered on the payment step. Number and CVV are
/// truncated to their maximum lengths on construction and are not
/// semantically validated beyond presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetails {
    pub number: Masked<String>,
    pub holder_name: String,
    pub expiry: String,
    pub cvv: Masked<String>,
}

impl CardDetails {
    pub fn new(number: &str, holder_name: &str, expiry: &str, cvv: &str) -> Self {
        Self {
            number: Masked(truncate_digits(number, CARD_NUMBER_MAX_DIGITS)),
            holder_name: holder_name.trim().to_string(),
            expiry: expiry.trim().to_string(),
            cvv: Masked(truncate_digits(cvv, CVV_MAX_DIGITS)),
        }
    }
}

fn truncate_digits(input: &str, max: usize) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).take(max).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    pub card: Option<CardDetails>,
}

impl PaymentDetails {
    pub fn card(details: CardDetails) -> Self {
        Self {
            method: PaymentMethod::Card,
            card: Some(details),
        }
    }

    pub fn non_card(method: PaymentMethod) -> Self {
        Self { method, card: None }
    }
}

/// Gate into the payment step: every row needs a first name, last name,
/// date of birth and gender. The latter two are present by construction,
/// so only the free-text names are checked.
pub fn validate_passenger(index: usize, passenger: &Passenger) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if passenger.first_name.trim().is_empty() {
        issues.push(ValidationIssue::new(
            format!("passengers[{index}].first_name"),
            "First name is required",
        ));
    }
    if passenger.last_name.trim().is_empty() {
        issues.push(ValidationIssue::new(
            format!("passengers[{index}].last_name"),
            "Last name is required",
        ));
    }
    issues
}

/// Validates the full roster against the passenger count requested at
/// search time.
pub fn validate_passengers(passengers: &[Passenger], expected_count: u32) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if passengers.len() != expected_count as usize {
        issues.push(ValidationIssue::new(
            "passengers",
            format!(
                "Expected {} passenger(s), got {}",
                expected_count,
                passengers.len()
            ),
        ));
    }
    for (i, passenger) in passengers.iter().enumerate() {
        issues.extend(validate_passenger(i, passenger));
    }
    issues
}

/// Gate into confirmation: a method must be selected and card-based
/// methods need all card fields present.
pub fn validate_payment(details: &PaymentDetails) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if !details.method.is_card_based() {
        return issues;
    }
    match &details.card {
        None => issues.push(ValidationIssue::new("card", "Card details are required")),
        Some(card) => {
            if card.number.inner().is_empty() {
                issues.push(ValidationIssue::new("card.number", "Card number is required"));
            }
            if card.holder_name.is_empty() {
                issues.push(ValidationIssue::new(
                    "card.holder_name",
                    "Cardholder name is required",
                ));
            }
            if card.expiry.is_empty() {
                issues.push(ValidationIssue::new("card.expiry", "Expiry is required"));
            }
            if card.cvv.inner().is_empty() {
                issues.push(ValidationIssue::new("card.cvv", "CVV is required"));
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Gender;

    fn passenger(first: &str, last: &str) -> Passenger {
        Passenger {
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: "1990-01-15".parse().unwrap(),
            gender: Gender::Female,
            passport_number: None,
            email: None,
            phone: None,
        }
    }

    #[test]
    fn complete_passenger_passes() {
        assert!(validate_passenger(0, &passenger("Asha", "Verma")).is_empty());
    }

    #[test]
    fn blank_names_are_reported_per_field() {
        let issues = validate_passenger(1, &passenger("", "  "));
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["passengers[1].first_name", "passengers[1].last_name"]
        );
    }

    #[test]
    fn roster_size_must_match_search() {
        let issues = validate_passengers(&[passenger("Asha", "Verma")], 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "passengers");
    }

    #[test]
    fn card_number_and_cvv_are_truncated() {
        let card = CardDetails::new("4111 1111 1111 1111 1111 9999", "A Verma", "12/27", "123456");
        assert_eq!(card.number.inner().len(), 19);
        assert_eq!(card.cvv.inner(), "1234");
    }

    #[test]
    fn card_payment_requires_all_fields() {
        let details = PaymentDetails::card(CardDetails::new("", "", "", ""));
        let issues = validate_payment(&details);
        assert_eq!(issues.len(), 4);
    }

    #[test]
    fn non_card_methods_skip_card_checks() {
        let details = PaymentDetails::non_card(PaymentMethod::Upi);
        assert!(validate_payment(&details).is_empty());
    }
}
