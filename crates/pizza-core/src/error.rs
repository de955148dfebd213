//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  ├── CoreError        - Unknown menu keys / field names in input        │
//! │  └── ValidationError  - A form field breaks a rule                      │
//! │                                                                         │
//! │  order-desk errors (app crate)                                         │
//! │  ├── SinkError        - Order placement failed                         │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors (shown next to the field)         │
//! │        CoreError / SinkError → ApiError → Frontend                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `ValidationError`'s Display text IS the message shown under the field
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::OrderField;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning presentation input into domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Unknown pizza size: {0}")]
    UnknownSize(String),

    #[error("Unknown crust: {0}")]
    UnknownCrust(String),

    #[error("Unknown topping: {0}")]
    UnknownTopping(String),

    /// The presentation layer sent an edit for a field the form does not have.
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// The value cannot be interpreted for this field (e.g. a non-boolean
    /// delivery flag).
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// A form field failed its rule.
///
/// ## User Workflow
/// ```text
/// Submit ──► validate() ──► ValidationError::PhoneInvalid
///                                │
///                                ▼
///            FieldErrors { phone: "Please enter a valid phone number" }
///                                │
///                                ▼
///            Form shows the message under the phone input
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your full name")]
    NameTooShort,

    #[error("Phone number is required")]
    PhoneRequired,

    #[error("Please enter a valid phone number")]
    PhoneInvalid,

    #[error("Email address is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Delivery address is required")]
    AddressRequired,

    #[error("Please select at least one topping")]
    NoToppings,
}

impl ValidationError {
    /// The field this error is displayed under.
    pub const fn field(&self) -> OrderField {
        match self {
            ValidationError::NameTooShort => OrderField::Name,
            ValidationError::PhoneRequired | ValidationError::PhoneInvalid => OrderField::Phone,
            ValidationError::EmailRequired | ValidationError::EmailInvalid => OrderField::Email,
            ValidationError::AddressRequired => OrderField::Address,
            ValidationError::NoToppings => OrderField::Toppings,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
