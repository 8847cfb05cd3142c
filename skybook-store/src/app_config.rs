use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub business_rules: BusinessRules,
    pub latency: LatencyConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the per-key JSON blobs
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Fraction of the subtotal charged as tax (0.12 or 0.15 depending on flow)
    pub tax_rate: f64,
}

/// Fixed delays standing in for network round trips. Zeroed in tests.
#[derive(Debug, Deserialize, Clone)]
pub struct LatencyConfig {
    #[serde(default = "default_auth_ms")]
    pub auth_ms: u64,
    #[serde(default = "default_provider_ms")]
    pub provider_ms: u64,
    #[serde(default = "default_payment_min_ms")]
    pub payment_min_ms: u64,
    #[serde(default = "default_payment_max_ms")]
    pub payment_max_ms: u64,
}

fn default_auth_ms() -> u64 {
    1000
}
fn default_provider_ms() -> u64 {
    1500
}
fn default_payment_min_ms() -> u64 {
    1000
}
fn default_payment_max_ms() -> u64 {
    2000
}

/// The fixed demo admin identity. These are published demo credentials,
/// not a secret.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub admin_email: String,
    pub admin_secret: String,
    pub admin_name: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYBOOK__BUSINESS_RULES__TAX_RATE=0.12`
            .add_source(config::Environment::with_prefix("SKYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
