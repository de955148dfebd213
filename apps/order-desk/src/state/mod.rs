//! # State Module
//!
//! State owned by the order engine, split into focused types the way the
//! engine uses them:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          OrderEngine                                    │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │ CustomerInfo     │  │ PizzaOrder       │  │ FormState            │  │
//! │  │ (pizza-core)     │  │ (pizza-core)     │  │ errors, is_submitting│  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  ┌──────────────────┐                                                   │
//! │  │ DeskConfig       │  read-only after startup                          │
//! │  └──────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{DeskConfig, DEFAULT_STORE_NAME};
pub use form::{FormState, SubmissionPhase};
