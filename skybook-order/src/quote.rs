use serde::{Deserialize, Serialize};

/// Monetary breakdown for a booking, in whole currency units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingQuote {
    pub subtotal: i64,
    pub taxes: i64,
    pub total: i64,
}

impl BookingQuote {
    /// subtotal = price x passengers; taxes = round(subtotal x rate)
    pub fn new(price: i64, passenger_count: u32, tax_rate: f64) -> Self {
        let subtotal = price * passenger_count as i64;
        let taxes = (subtotal as f64 * tax_rate).round() as i64;
        Self {
            subtotal,
            taxes,
            total: subtotal + taxes,
        }
    }
}
