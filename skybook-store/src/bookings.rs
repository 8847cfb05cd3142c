use skybook_core::Booking;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::state_store::{StateStore, StoreError};

/// Storage key for the persisted bookings table
pub const BOOKINGS_KEY: &str = "skybook_bookings";

/// Ordered bookings table persisted as one JSON array. Every mutation
/// rewrites the whole array; there is no deduplication and no version
/// field.
pub struct BookingRepo {
    store: Arc<dyn StateStore>,
}

impl BookingRepo {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// All persisted bookings in insertion order. Absent or unparsable
    /// data degrades to the empty table.
    pub async fn list(&self) -> Result<Vec<Booking>, StoreError> {
        let Some(raw) = self.store.load(BOOKINGS_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(bookings) => Ok(bookings),
            Err(e) => {
                warn!(error = %e, "Persisted bookings unparsable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append and persist. Identifiers are not checked for uniqueness.
    pub async fn append(&self, booking: Booking) -> Result<(), StoreError> {
        let mut bookings = self.list().await?;
        bookings.push(booking);
        self.persist(&bookings).await
    }

    /// Flip the booking's status to cancelled and re-persist. Unknown
    /// identifiers and already-cancelled bookings are silent no-ops.
    pub async fn cancel(&self, id: &str) -> Result<(), StoreError> {
        let mut bookings = self.list().await?;
        match bookings.iter_mut().find(|b| b.id == id) {
            None => {
                debug!(id, "Cancel requested for unknown booking");
                Ok(())
            }
            Some(booking) if booking.is_cancelled() => Ok(()),
            Some(booking) => {
                booking.cancel();
                self.persist(&bookings).await
            }
        }
    }

    async fn persist(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(bookings)?;
        self.store.save(BOOKINGS_KEY, &raw).await
    }
}
