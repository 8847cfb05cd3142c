pub mod auth;
pub mod context;
pub mod session;

pub use auth::{AdminIdentity, AuthError, AuthLatency, AuthService, ADMIN_USER_ID};
pub use context::SessionContext;
pub use session::BookingSession;
