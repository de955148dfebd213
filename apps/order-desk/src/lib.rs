//! # Order Desk Library
//!
//! Form state and order submission for Mario's Pizza. Pricing and validation
//! live in `pizza-core`; this crate owns the mutable side.
//!
//! ## Module Organization
//! ```text
//! order_desk/
//! ├── lib.rs          ◄─── You are here (exports & logging setup)
//! ├── engine.rs       ◄─── OrderEngine: edits, validation passes, submit
//! ├── sink.rs         ◄─── OrderSink trait, LoggingSink
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── Error mapping + is_submitting
//! │   └── config.rs   ◄─── Store name, currency symbol
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── order.rs    ◄─── Order request → edits → submit
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Quick Start
//! ```rust,no_run
//! use std::sync::Arc;
//! use order_desk::{DeskConfig, FieldEdit, LoggingSink, OrderEngine};
//! use pizza_core::{PizzaSize, Topping};
//!
//! # async fn demo() {
//! let mut engine = OrderEngine::new(DeskConfig::from_env(), Arc::new(LoggingSink));
//! engine.apply(FieldEdit::Name("Jane Doe".into()));
//! engine.apply(FieldEdit::Size(PizzaSize::Large));
//! engine.apply(FieldEdit::Topping { topping: Topping::Pepperoni, selected: true });
//!
//! let outcome = engine.submit().await;
//! # }
//! ```

pub mod commands;
pub mod engine;
pub mod error;
pub mod sink;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use engine::{
    FieldEdit, Fulfillment, OrderConfirmation, OrderEngine, OrderSummary, PendingSubmission,
    Rejection, SubmissionFailure, SubmitOutcome,
};
pub use error::{ApiError, ErrorCode};
pub use sink::{LoggingSink, OrderSink, SinkError, SinkResult};
pub use state::{DeskConfig, FormState, SubmissionPhase};

/// Installs the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=order_desk=trace` - Show trace for the order desk only
/// - Default: INFO, DEBUG for the order desk and pizza-core
///
/// Logs go to stderr so stdout stays clean for the driver's JSON output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,order_desk=debug,pizza_core=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
