use async_trait::async_trait;
use rand::Rng;
use skybook_core::PaymentDetails;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Card number the mock gateway declines, mirroring common gateway test
/// sentinels.
pub const DECLINE_CARD_NUMBER: &str = "4000000000000002";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved { reference: String },
    Declined { reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment gateway timed out")]
    Timeout,

    #[error("Payment gateway failure: {0}")]
    Gateway(String),
}

/// Seam to the payment provider. The demo only ever talks to the mock,
/// but the wizard is written against the trait.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(
        &self,
        amount: i64,
        details: &PaymentDetails,
    ) -> Result<PaymentOutcome, PaymentError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GatewayMode {
    Normal,
    TimingOut,
}

/// Simulates a payment-gateway round trip with a configurable delay
/// window. Charges approve unless the decline sentinel card is used or
/// the gateway is configured to time out.
pub struct MockPaymentGateway {
    delay_ms: RangeInclusive<u64>,
    mode: GatewayMode,
}

impl MockPaymentGateway {
    /// Production-shaped delay: 1-2 seconds
    pub fn new() -> Self {
        Self {
            delay_ms: 1000..=2000,
            mode: GatewayMode::Normal,
        }
    }

    /// No artificial delay, for tests
    pub fn instant() -> Self {
        Self {
            delay_ms: 0..=0,
            mode: GatewayMode::Normal,
        }
    }

    pub fn with_delay_ms(delay_ms: RangeInclusive<u64>) -> Self {
        Self {
            delay_ms,
            mode: GatewayMode::Normal,
        }
    }

    /// Every charge ends in a timeout after the delay elapses
    pub fn timing_out() -> Self {
        Self {
            delay_ms: 0..=0,
            mode: GatewayMode::TimingOut,
        }
    }

    async fn simulate_latency(&self) {
        let ms = if self.delay_ms.start() == self.delay_ms.end() {
            *self.delay_ms.start()
        } else {
            rand::thread_rng().gen_range(self.delay_ms.clone())
        };
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(
        &self,
        amount: i64,
        details: &PaymentDetails,
    ) -> Result<PaymentOutcome, PaymentError> {
        self.simulate_latency().await;

        if self.mode == GatewayMode::TimingOut {
            tracing::warn!(amount, "Simulated gateway timeout");
            return Err(PaymentError::Timeout);
        }

        if let Some(card) = &details.card {
            if card.number.inner() == DECLINE_CARD_NUMBER {
                tracing::info!(amount, "Charge declined");
                return Ok(PaymentOutcome::Declined {
                    reason: "Card declined by issuer".to_string(),
                });
            }
        }

        let reference = format!("pay_{}", chrono::Utc::now().timestamp_millis());
        tracing::info!(amount, %reference, "Charge approved");
        Ok(PaymentOutcome::Approved { reference })
    }
}
