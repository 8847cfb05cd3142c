pub mod app_config;
pub mod bookings;
pub mod state_store;
pub mod users;

pub use bookings::BookingRepo;
pub use state_store::{JsonFileStore, MemoryStore, StateStore, StoreError};
pub use users::{secret_digest, RegisteredUser, SessionRepo, UserRepo};
