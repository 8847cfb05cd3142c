use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::flight::FlightOffer;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A traveller on a booking. Mutable while the wizard collects details,
/// frozen once the booking is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub passport_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// A persisted record linking a user, a flight snapshot and passengers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub flight: FlightOffer,
    pub passengers: Vec<Passenger>,
    /// Base price x passengers plus taxes, whole currency units
    pub total_amount: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub payment_method: String,
}

impl Booking {
    /// Time-derived booking reference, e.g. "BK1724140800000"
    pub fn new_reference(now: DateTime<Utc>) -> String {
        format!("BK{}", now.timestamp_millis())
    }

    /// Status only moves forward to cancelled; cancelling a cancelled
    /// booking leaves it unchanged.
    pub fn cancel(&mut self) {
        if self.status != BookingStatus::Cancelled {
            self.status = BookingStatus::Cancelled;
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::{CabinClass, ScheduleStop};

    fn sample_flight() -> FlightOffer {
        FlightOffer {
            id: "AI1101-0".to_string(),
            airline: "Air India".to_string(),
            flight_number: "AI1101".to_string(),
            departure: ScheduleStop {
                airport: "DEL".to_string(),
                city: "Delhi".to_string(),
                date: "2024-08-20".parse().unwrap(),
                time: "06:00:00".parse().unwrap(),
            },
            arrival: ScheduleStop {
                airport: "BOM".to_string(),
                city: "Mumbai".to_string(),
                date: "2024-08-20".parse().unwrap(),
                time: "08:15:00".parse().unwrap(),
            },
            duration_minutes: 135,
            price: 4500,
            available_seats: 45,
            cabin_class: CabinClass::Economy,
            stops: 0,
        }
    }

    fn sample_booking() -> Booking {
        Booking {
            id: "BK1724140800000".to_string(),
            user_id: "admin-001".to_string(),
            flight: sample_flight(),
            passengers: vec![],
            total_amount: 10080,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
            payment_method: "card".to_string(),
        }
    }

    #[test]
    fn cancel_is_one_way_and_idempotent() {
        let mut booking = sample_booking();
        booking.cancel();
        assert_eq!(booking.status, BookingStatus::Cancelled);
        booking.cancel();
        assert_eq!(booking.status, BookingStatus::Cancelled);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        let back: BookingStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(back, BookingStatus::Confirmed);
    }
}
