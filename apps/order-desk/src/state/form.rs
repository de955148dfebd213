//! # Form State
//!
//! Submission state of the order form: the field error mapping and the
//! in-flight flag.
//!
//! ## How Errors Change
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Mapping Operations                             │
//! │                                                                         │
//! │  Frontend Action          Engine Call             Mapping Change        │
//! │  ───────────────          ───────────             ──────────────        │
//! │                                                                         │
//! │  Type in a field ────────► apply(edit) ─────────► that key removed     │
//! │                                                                         │
//! │  Leave a field ──────────► revalidate_field() ──► that key set/removed │
//! │                                                                         │
//! │  Click Place Order ──────► revalidate_all() ────► whole map replaced   │
//! │                                                                         │
//! │  NOTE: an edit never re-validates. A stale error disappears as soon    │
//! │        as the field changes and comes back only on the next pass.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pizza_core::{FieldErrors, OrderField, ValidationError};
use serde::{Deserialize, Serialize};

/// Whether an order placement call is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// Editing. Validation passes run synchronously and return here.
    #[default]
    Idle,
    /// Waiting on the order sink. New submissions are refused.
    Submitting,
}

/// Error mapping plus the in-flight flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub errors: FieldErrors,
    pub is_submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.is_submitting {
            SubmissionPhase::Submitting
        } else {
            SubmissionPhase::Idle
        }
    }

    /// Drops one field's error. Returns true if there was one.
    pub fn clear_field_error(&mut self, field: OrderField) -> bool {
        self.errors.remove(field).is_some()
    }

    /// Applies the result of a single-field check.
    pub fn set_field_result(&mut self, field: OrderField, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.errors.remove(field);
            }
            Err(err) => self.errors.record(err),
        }
    }

    /// Swaps in the result of a full validation pass.
    pub fn replace_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_follows_flag() {
        let mut form = FormState::new();
        assert_eq!(form.phase(), SubmissionPhase::Idle);

        form.is_submitting = true;
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn test_clear_field_error_only_touches_that_field() {
        let mut form = FormState::new();
        form.errors.record(ValidationError::NameTooShort);
        form.errors.record(ValidationError::EmailInvalid);

        assert!(form.clear_field_error(OrderField::Name));
        assert!(!form.clear_field_error(OrderField::Name));
        assert!(form.errors.contains(OrderField::Email));
    }

    #[test]
    fn test_set_field_result() {
        let mut form = FormState::new();
        form.set_field_result(OrderField::Phone, Err(ValidationError::PhoneInvalid));
        assert_eq!(
            form.errors.get(OrderField::Phone),
            Some("Please enter a valid phone number")
        );

        form.set_field_result(OrderField::Phone, Ok(()));
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_replace_errors() {
        let mut form = FormState::new();
        form.errors.record(ValidationError::NameTooShort);

        let mut fresh = FieldErrors::new();
        fresh.record(ValidationError::NoToppings);
        form.replace_errors(fresh);

        assert!(!form.errors.contains(OrderField::Name));
        assert!(form.errors.contains(OrderField::Toppings));
    }
}
