//! # Order Sinks
//!
//! Where a validated order goes. The engine does not know the transport; it
//! hands an [`OrderRecord`] to whatever [`OrderSink`] it was built with and
//! only cares whether that succeeded.
//!
//! ```text
//! OrderEngine::submit
//!      │
//!      ▼
//! sink.place_order(&record).await ──► Ok(())   → confirmation, form reset
//!                                 └─► Err(e)   → retry message, form kept
//! ```

use async_trait::async_trait;
use pizza_core::OrderRecord;
use thiserror::Error;
use tracing::info;

/// Order placement failures.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The receiving side refused the order.
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The receiving side could not be reached.
    #[error("Order service unavailable: {0}")]
    Unavailable(String),

    #[error("Could not encode order: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Places orders. Implementations may suspend; the engine holds
/// `is_submitting` for the whole call.
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn place_order(&self, record: &OrderRecord) -> SinkResult<()>;
}

/// Logs each order as JSON and accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

#[async_trait]
impl OrderSink for LoggingSink {
    async fn place_order(&self, record: &OrderRecord) -> SinkResult<()> {
        let payload = serde_json::to_string(record)?;
        info!(
            order_id = record.order_id,
            total_cents = record.total_cents,
            %payload,
            "Submitting order"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pizza_core::{CustomerInfo, PizzaOrder};

    #[tokio::test]
    async fn test_logging_sink_accepts() {
        let record = OrderRecord::new(
            7,
            &CustomerInfo::default(),
            &PizzaOrder::default(),
            Utc::now(),
        );
        assert!(LoggingSink.place_order(&record).await.is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = SinkError::Unavailable("kitchen printer offline".to_string());
        assert_eq!(
            err.to_string(),
            "Order service unavailable: kitchen printer offline"
        );
    }
}
