use skybook_core::{Booking, FlightOffer, Passenger, SearchParams};
use skybook_store::{BookingRepo, StateStore, StoreError};
use std::sync::Arc;

/// Per-session booking state: the current search, the selected flight,
/// the passenger roster being edited, and the persisted bookings table.
/// Replaces the original's global provider state with an explicit context
/// object; persistence is the injected [`StateStore`].
pub struct BookingSession {
    search_params: Option<SearchParams>,
    selected_flight: Option<FlightOffer>,
    passengers: Vec<Passenger>,
    bookings: Vec<Booking>,
    repo: BookingRepo,
}

impl BookingSession {
    /// Loads previously persisted bookings; absent or corrupt data starts
    /// the session empty.
    pub async fn load(store: Arc<dyn StateStore>) -> Result<Self, StoreError> {
        let repo = BookingRepo::new(store);
        let bookings = repo.list().await?;
        Ok(Self {
            search_params: None,
            selected_flight: None,
            passengers: Vec::new(),
            bookings,
            repo,
        })
    }

    // Pure overwrites, no validation

    pub fn set_search_params(&mut self, params: SearchParams) {
        self.search_params = Some(params);
    }

    pub fn search_params(&self) -> Option<&SearchParams> {
        self.search_params.as_ref()
    }

    pub fn set_selected_flight(&mut self, flight: FlightOffer) {
        self.selected_flight = Some(flight);
    }

    pub fn selected_flight(&self) -> Option<&FlightOffer> {
        self.selected_flight.as_ref()
    }

    pub fn set_passengers(&mut self, passengers: Vec<Passenger>) {
        self.passengers = passengers;
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Append and persist the full updated table before returning
    pub async fn add_booking(&mut self, booking: Booking) -> Result<(), StoreError> {
        self.repo.append(booking.clone()).await?;
        self.bookings.push(booking);
        Ok(())
    }

    /// Silent no-op when the identifier is unknown
    pub async fn cancel_booking(&mut self, id: &str) -> Result<(), StoreError> {
        self.repo.cancel(id).await?;
        if let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) {
            booking.cancel();
        }
        Ok(())
    }

    /// Abandon the in-progress selection without touching persisted state
    pub fn clear_selection(&mut self) {
        self.selected_flight = None;
        self.passengers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use skybook_core::{BookingStatus, CabinClass, ScheduleStop};
    use skybook_store::MemoryStore;

    fn flight() -> FlightOffer {
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

    fn booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            user_id: "admin-001".to_string(),
            flight: flight(),
            passengers: vec![],
            total_amount: 10080,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
            payment_method: "card".to_string(),
        }
    }

    #[tokio::test]
    async fn bookings_survive_a_reload() {
        let store = Arc::new(MemoryStore::new());

        let mut session = BookingSession::load(store.clone()).await.unwrap();
        session.add_booking(booking("BK1")).await.unwrap();
        session.add_booking(booking("BK2")).await.unwrap();

        let reloaded = BookingSession::load(store).await.unwrap();
        assert_eq!(reloaded.bookings(), session.bookings());
        assert_eq!(reloaded.bookings()[0].id, "BK1");
    }

    #[tokio::test]
    async fn cancel_updates_both_memory_and_storage() {
        let store = Arc::new(MemoryStore::new());
        let mut session = BookingSession::load(store.clone()).await.unwrap();
        session.add_booking(booking("BK1")).await.unwrap();

        session.cancel_booking("BK1").await.unwrap();
        assert_eq!(session.bookings()[0].status, BookingStatus::Cancelled);

        let reloaded = BookingSession::load(store).await.unwrap();
        assert_eq!(reloaded.bookings()[0].status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn clear_selection_keeps_bookings() {
        let store = Arc::new(MemoryStore::new());
        let mut session = BookingSession::load(store).await.unwrap();
        session.set_selected_flight(flight());
        session.add_booking(booking("BK1")).await.unwrap();

        session.clear_selection();
        assert!(session.selected_flight().is_none());
        assert!(session.passengers().is_empty());
        assert_eq!(session.bookings().len(), 1);
    }
}
