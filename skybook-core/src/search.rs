use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::flight::CabinClass;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    OneWay,
    RoundTrip,
}

/// Criteria entered on the search form. Overwritten wholesale on each
/// search; never validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub cabin_class: CabinClass,
    pub trip_type: TripType,
}

impl SearchParams {
    pub fn one_way(origin: &str, destination: &str, date: NaiveDate, passengers: u32) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: date,
            return_date: None,
            passengers,
            cabin_class: CabinClass::Economy,
            trip_type: TripType::OneWay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_search_params_deserialization() {
        let json = r#"
            {
                "origin": "DEL",
                "destination": "BOM",
                "departure_date": "2024-08-20",
                "return_date": null,
                "passengers": 2,
                "cabin_class": "Economy",
                "trip_type": "one-way"
            }
        "#;
        let params: SearchParams = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(params.origin, "DEL");
        assert_eq!(params.departure_date, NaiveDate::from_ymd_opt(2024, 8, 20).unwrap());
        assert_eq!(params.trip_type, TripType::OneWay);
    }
}
