use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skybook_core::{CabinClass, FlightOffer, ScheduleStop, SearchParams};

use crate::data::{airport_city, AIRLINES};

const MIN_OFFERS: u32 = 5;
const MAX_OFFERS: u32 = 12;
const MIN_DURATION_MINUTES: u32 = 120;
const MAX_DURATION_MINUTES: u32 = 899;
const NONSTOP_PREMIUM: i64 = 100;

/// Synthesizes flight offers for a route. Pure apart from the injected
/// random source; seed it for reproducible output.
pub struct OfferGenerator<R: Rng> {
    rng: R,
}

impl OfferGenerator<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for OfferGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> OfferGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, params: &SearchParams) -> Result<Vec<FlightOffer>, OfferError> {
        self.generate_route(&params.origin, &params.destination, params.departure_date)
    }

    /// Generate 5-12 offers for the route, sorted ascending by price.
    pub fn generate_route(
        &mut self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, OfferError> {
        let origin = origin.trim().to_uppercase();
        let destination = destination.trim().to_uppercase();
        if origin.is_empty() || destination.is_empty() {
            return Err(OfferError::MissingRoute);
        }
        if origin == destination {
            return Err(OfferError::SameRoute(origin));
        }

        let count = self.rng.gen_range(MIN_OFFERS..=MAX_OFFERS);
        let mut offers = Vec::with_capacity(count as usize);

        for i in 0..count {
            offers.push(self.synthesize(i, &origin, &destination, date));
        }

        offers.sort_by_key(|o| o.price);
        tracing::debug!(
            route = %format!("{origin}-{destination}"),
            count = offers.len(),
            "Generated flight offers"
        );
        Ok(offers)
    }

    fn synthesize(
        &mut self,
        index: u32,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> FlightOffer {
        let airline = AIRLINES[self.rng.gen_range(0..AIRLINES.len())];
        let prefix: String = airline.chars().take(2).collect::<String>().to_uppercase();
        let flight_number = format!("{}{}", prefix, self.rng.gen_range(1000..=9999));

        let departure_minute = self.rng.gen_range(0..24 * 60);
        let departure_at =
            date.and_time(chrono::NaiveTime::MIN) + Duration::minutes(departure_minute as i64);

        let duration_minutes = self.rng.gen_range(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES);
        let arrival_at = departure_at + Duration::minutes(duration_minutes as i64);

        // 60% nonstop; the rest split 60/40 into one and two stops
        let stops = if self.rng.gen::<f64>() < 0.6 {
            0
        } else if self.rng.gen::<f64>() < 0.6 {
            1
        } else {
            2
        };

        let base_price: i64 = self.rng.gen_range(200..2000);
        let price = if stops == 0 {
            base_price + NONSTOP_PREMIUM
        } else {
            base_price
        };

        let cabin_class = match self.rng.gen_range(0..10) {
            0..=6 => CabinClass::Economy,
            7..=8 => CabinClass::Business,
            _ => CabinClass::First,
        };

        FlightOffer {
            id: format!("{flight_number}-{index}"),
            airline: airline.to_string(),
            flight_number,
            departure: ScheduleStop {
                airport: origin.to_string(),
                city: airport_city(origin).to_string(),
                date: departure_at.date(),
                time: departure_at.time(),
            },
            arrival: ScheduleStop {
                airport: destination.to_string(),
                city: airport_city(destination).to_string(),
                date: arrival_at.date(),
                time: arrival_at.time(),
            },
            duration_minutes,
            price,
            available_seats: self.rng.gen_range(10..=59),
            cabin_class,
            stops,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OfferError {
    #[error("Origin and destination are required")]
    MissingRoute,

    #[error("Origin and destination must differ: {0}")]
    SameRoute(String),
}
