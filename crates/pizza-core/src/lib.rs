//! # pizza-core: Pure Ordering Logic
//!
//! This crate holds the pricing and validation rules of the order form as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Order Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Order Form (frontend)                        │   │
//! │  │    Customer ──► Build your Pizza ──► Summary ──► Place Order    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ field edits / submit                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  order-desk (OrderEngine)                       │   │
//! │  │    apply, revalidate_all, submit, OrderSink                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ Customer  │  │   Money   │  │  totals   │  │   rules   │  │   │
//! │  │   │ PizzaOrder│  │  (cents)  │  │ breakdown │  │FieldErrors│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO ASYNC • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CustomerInfo, PizzaOrder, OrderRecord, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Menu price tables and order totals
//! - [`validation`] - Form validation rules and the field error mapping
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{validation, pricing, CustomerInfo, PizzaOrder, Topping};
//!
//! let mut pizza = PizzaOrder::default();          // medium, regular crust
//! pizza.toppings.insert(Topping::Mushrooms);
//!
//! assert_eq!(pricing::price_of_pizza_only(&pizza), "15.99");
//! assert_eq!(pricing::price_of_full_order(&pizza, false), "17.49");
//!
//! let errors = validation::validate(&CustomerInfo::default(), &pizza);
//! assert!(!errors.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::PriceBreakdown;
pub use types::*;
pub use validation::FieldErrors;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest acceptable name, counted after trimming.
pub const MIN_NAME_CHARS: usize = 2;

/// Shortest acceptable phone number, counted with whitespace removed.
pub const MIN_PHONE_CHARS: usize = 10;

/// Cap on the special instructions text box.
pub const MAX_SPECIAL_INSTRUCTIONS_CHARS: usize = 200;

/// Estimated window shown for delivery orders.
pub const DELIVERY_WINDOW: &str = "45-60 minutes";

/// Estimated window shown for pickup orders.
pub const PICKUP_WINDOW: &str = "20-30 minutes";

/// Order numbers are drawn from `0..ORDER_ID_RANGE`.
///
/// ## Business Reason
/// The number is only read back over the phone. Collisions are acceptable;
/// it is not an order tracking key.
pub const ORDER_ID_RANGE: u32 = 100_000;
