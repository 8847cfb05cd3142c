use rand::rngs::StdRng;
use skybook_core::{FlightOffer, SearchParams};
use skybook_offer::{OfferError, OfferGenerator};
use skybook_order::BookingQuote;
use skybook_store::app_config::Config;
use skybook_store::{JsonFileStore, StateStore, StoreError};
use std::sync::Arc;

use crate::auth::{AdminIdentity, AuthLatency, AuthService};
use crate::session::BookingSession;

/// Everything one signed-in browser session works with: the auth shim,
/// the booking state, the offer generator and the pricing rule. Handlers
/// receive this instead of reaching for globals.
pub struct SessionContext {
    pub auth: AuthService,
    pub booking: BookingSession,
    generator: OfferGenerator<StdRng>,
    tax_rate: f64,
}

impl SessionContext {
    pub async fn new(
        store: Arc<dyn StateStore>,
        admin: AdminIdentity,
        latency: AuthLatency,
        generator: OfferGenerator<StdRng>,
        tax_rate: f64,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            auth: AuthService::new(store.clone(), admin, latency),
            booking: BookingSession::load(store).await?,
            generator,
            tax_rate,
        })
    }

    /// Wire up from the loaded application config, with file-backed storage.
    pub async fn from_config(config: &Config) -> Result<Self, StoreError> {
        let store: Arc<dyn StateStore> = Arc::new(JsonFileStore::new(&config.storage.data_dir));
        Self::new(
            store,
            AdminIdentity::from(&config.auth),
            AuthLatency::from(&config.latency),
            OfferGenerator::new(),
            config.business_rules.tax_rate,
        )
        .await
    }

    /// Record the criteria and synthesize matching offers. The offers are
    /// ephemeral; only the criteria live on in the session.
    pub fn search(&mut self, params: SearchParams) -> Result<Vec<FlightOffer>, OfferError> {
        let offers = self.generator.generate(&params)?;
        self.booking.set_search_params(params);
        Ok(offers)
    }

    /// Price breakdown for a flight at this session's tax rate
    pub fn quote_for(&self, flight: &FlightOffer, passenger_count: u32) -> BookingQuote {
        BookingQuote::new(flight.price, passenger_count, self.tax_rate)
    }
}
