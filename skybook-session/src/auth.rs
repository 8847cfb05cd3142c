use skybook_core::User;
use skybook_store::app_config::{AuthConfig, LatencyConfig};
use skybook_store::{secret_digest, RegisteredUser, SessionRepo, StateStore, StoreError, UserRepo};
use skybook_shared::Masked;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const ADMIN_USER_ID: &str = "admin-001";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The fixed demo admin identity, checked before the registered table.
#[derive(Clone)]
pub struct AdminIdentity {
    email: String,
    name: String,
    secret_hash: String,
}

impl AdminIdentity {
    pub fn new(email: &str, secret: &str, name: &str) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            secret_hash: secret_digest(secret),
        }
    }

    fn matches(&self, email: &str, secret: &str) -> bool {
        self.email == email && self.secret_hash == secret_digest(secret)
    }
}

impl From<&AuthConfig> for AdminIdentity {
    fn from(config: &AuthConfig) -> Self {
        Self::new(&config.admin_email, &config.admin_secret, &config.admin_name)
    }
}

/// Simulated network delays for the auth calls
#[derive(Debug, Clone, Copy)]
pub struct AuthLatency {
    pub auth: Duration,
    pub provider: Duration,
}

impl AuthLatency {
    pub fn none() -> Self {
        Self {
            auth: Duration::ZERO,
            provider: Duration::ZERO,
        }
    }
}

impl From<&LatencyConfig> for AuthLatency {
    fn from(config: &LatencyConfig) -> Self {
        Self {
            auth: Duration::from_millis(config.auth_ms),
            provider: Duration::from_millis(config.provider_ms),
        }
    }
}

/// Local authentication shim over the registered-user table. No real
/// identity provider exists; delays stand in for network round trips.
pub struct AuthService {
    users: UserRepo,
    session: SessionRepo,
    admin: AdminIdentity,
    latency: AuthLatency,
}

impl AuthService {
    pub fn new(store: Arc<dyn StateStore>, admin: AdminIdentity, latency: AuthLatency) -> Self {
        Self {
            users: UserRepo::new(store.clone()),
            session: SessionRepo::new(store),
            admin,
            latency,
        }
    }

    /// Admin identity first, then an exact email + secret-digest match
    /// against the registered table. A success signs the identity in.
    pub async fn login(&self, email: &str, secret: &str) -> Result<User, AuthError> {
        self.pause(self.latency.auth).await;

        if self.admin.matches(email, secret) {
            let admin = User::new(ADMIN_USER_ID, self.admin.name.clone(), self.admin.email.clone());
            self.session.set(&admin).await?;
            tracing::info!(user_id = %admin.id, "Admin login");
            return Ok(admin);
        }

        match self.users.find_by_email(email).await? {
            Some(registered) if *registered.secret_hash.inner() == secret_digest(secret) => {
                let user = registered.as_user();
                self.session.set(&user).await?;
                tracing::info!(user_id = %user.id, "Login");
                Ok(user)
            }
            _ => {
                tracing::info!(email, "Login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Fails when the email is already registered (the admin email counts
    /// as taken); otherwise stores the identity with a hashed secret and
    /// signs it in.
    pub async fn register(&self, name: &str, email: &str, secret: &str) -> Result<User, AuthError> {
        self.pause(self.latency.auth).await;

        if email == self.admin.email || self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let registered = RegisteredUser {
            id: format!("user-{}", Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            secret_hash: Masked(secret_digest(secret)),
        };
        self.users.insert(registered.clone()).await?;

        let user = registered.as_user();
        self.session.set(&user).await?;
        tracing::info!(user_id = %user.id, "Registered");
        Ok(user)
    }

    /// Stand-in for a federated provider; always succeeds with a
    /// synthesized identity.
    pub async fn login_with_provider(&self) -> Result<User, AuthError> {
        self.pause(self.latency.provider).await;

        let user = User::new(
            format!("google-{}", chrono::Utc::now().timestamp_millis()),
            "Google User",
            "user@gmail.com",
        );
        self.session.set(&user).await?;
        tracing::info!(user_id = %user.id, "Provider login");
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        self.session.clear().await?;
        Ok(())
    }

    /// The identity persisted from a previous session, if any
    pub async fn current_user(&self) -> Result<Option<User>, AuthError> {
        Ok(self.session.current().await?)
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
