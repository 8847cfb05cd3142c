use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Cabin class offered on a flight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CabinClass {
    Economy,
    Business,
    First,
}

/// One end of a flight leg: where and when
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleStop {
    pub airport: String,
    pub city: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ScheduleStop {
    /// Combined date and time of this stop
    pub fn at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// A synthesized, non-persisted flight offer returned by a search.
/// Immutable once generated; regenerated on every search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightOffer {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure: ScheduleStop,
    pub arrival: ScheduleStop,
    pub duration_minutes: u32,
    /// Price per passenger in whole currency units
    pub price: i64,
    pub available_seats: u32,
    pub cabin_class: CabinClass,
    pub stops: u8,
}

impl FlightOffer {
    /// Human-readable duration, e.g. "2h 15m"
    pub fn duration_label(&self) -> String {
        format!("{}h {}m", self.duration_minutes / 60, self.duration_minutes % 60)
    }

    pub fn is_nonstop(&self) -> bool {
        self.stops == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(date: &str, time: &str) -> ScheduleStop {
        ScheduleStop {
            airport: "DEL".to_string(),
            city: "Delhi".to_string(),
            date: date.parse().unwrap(),
            time: time.parse().unwrap(),
        }
    }

    #[test]
    fn schedule_stop_combines_date_and_time() {
        let s = stop("2024-08-20", "06:00:00");
        assert_eq!(s.at().to_string(), "2024-08-20 06:00:00");
    }

    #[test]
    fn duration_label_formats_hours_and_minutes() {
        let offer = FlightOffer {
            id: "AI1101-0".to_string(),
            airline: "Air India".to_string(),
            flight_number: "AI1101".to_string(),
            departure: stop("2024-08-20", "06:00:00"),
            arrival: stop("2024-08-20", "08:15:00"),
            duration_minutes: 135,
            price: 4500,
            available_seats: 45,
            cabin_class: CabinClass::Economy,
            stops: 0,
        };
        assert_eq!(offer.duration_label(), "2h 15m");
        assert!(offer.is_nonstop());
    }
}
