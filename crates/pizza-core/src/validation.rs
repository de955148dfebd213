//! # Validation Module
//!
//! Order form validation rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      When Rules Run                                     │
//! │                                                                         │
//! │  Field blur ──► validate_field(field) ──► one entry set or removed     │
//! │                                                                         │
//! │  Submit ──────► validate(customer, pizza) ──► whole FieldErrors map    │
//! │                    │                            replaced                │
//! │                    └── empty map = order may be placed                  │
//! │                                                                         │
//! │  Every rule is independent: check order never changes the result.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::validation::validate;
//! use pizza_core::{CustomerInfo, OrderField, PizzaOrder};
//!
//! let errors = validate(&CustomerInfo::default(), &PizzaOrder::default());
//! assert_eq!(errors.first(), Some(OrderField::Name));
//! assert_eq!(errors.get(OrderField::Toppings), Some("Please select at least one topping"));
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::ValidationError;
use crate::types::{CustomerInfo, OrderField, PizzaOrder, ToppingSet};
use crate::{MIN_NAME_CHARS, MIN_PHONE_CHARS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// ASCII digits, spaces, hyphens, parentheses and plus signs; at least
/// `MIN_PHONE_CHARS` of them. `\d` would also admit non-ASCII digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[0-9\s\-\(\)\+]{{{MIN_PHONE_CHARS},}}$"))
        .expect("Invalid phone regex pattern")
});

/// local@domain.tld, no whitespace, exactly one '@'.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern")
});

// =============================================================================
// Field Error Mapping
// =============================================================================

/// Field name → user-facing message. A missing key means the field is valid.
///
/// Keys are ordered by [`OrderField`] (document order), so [`FieldErrors::first`]
/// is the error the form should scroll to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<OrderField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        FieldErrors(BTreeMap::new())
    }

    /// Records the error under its own field, replacing any previous message.
    pub fn record(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error.to_string());
    }

    pub fn insert(&mut self, field: OrderField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clears one field's entry. Returns the message that was there.
    pub fn remove(&mut self, field: OrderField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: OrderField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: OrderField) -> bool {
        self.0.contains_key(&field)
    }

    /// First errored field in document order.
    pub fn first(&self) -> Option<OrderField> {
        self.0.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OrderField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = OrderField> + '_ {
        self.0.keys().copied()
    }
}

// =============================================================================
// Customer Validators
// =============================================================================

/// Validates the customer's name.
///
/// ## Rules
/// - At least 2 characters after trimming
///
/// ```rust
/// use pizza_core::validation::validate_name;
///
/// assert!(validate_name("Jo").is_ok());
/// assert!(validate_name(" A ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be blank
/// - With all whitespace removed: at least 10 characters, only digits,
///   hyphens, parentheses and plus signs
///
/// ```rust
/// use pizza_core::validation::validate_phone;
/// use pizza_core::ValidationError;
///
/// assert!(validate_phone("(555) 123-4567").is_ok());
/// assert_eq!(validate_phone("   "), Err(ValidationError::PhoneRequired));
/// assert_eq!(validate_phone("555-CALL-NOW"), Err(ValidationError::PhoneInvalid));
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.trim().is_empty() {
        return Err(ValidationError::PhoneRequired);
    }

    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_PATTERN.is_match(&compact) {
        return Err(ValidationError::PhoneInvalid);
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be blank
/// - `local@domain.tld` shape, checked on the value as typed (surrounding
///   spaces make it invalid)
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }

    Ok(())
}

/// Validates the delivery address. Pickup orders need no address.
pub fn validate_address(address: &str, is_delivery: bool) -> ValidationResult<()> {
    if is_delivery && address.trim().is_empty() {
        return Err(ValidationError::AddressRequired);
    }
    Ok(())
}

// =============================================================================
// Pizza Validators
// =============================================================================

/// At least one topping. There is no maximum beyond the catalog size.
pub fn validate_toppings(toppings: &ToppingSet) -> ValidationResult<()> {
    if toppings.is_empty() {
        return Err(ValidationError::NoToppings);
    }
    Ok(())
}

// =============================================================================
// Form Validation
// =============================================================================

/// Runs the single rule owned by `field`.
pub fn validate_field(
    field: OrderField,
    customer: &CustomerInfo,
    order: &PizzaOrder,
) -> ValidationResult<()> {
    match field {
        OrderField::Name => validate_name(&customer.name),
        OrderField::Phone => validate_phone(&customer.phone),
        OrderField::Email => validate_email(&customer.email),
        OrderField::Address => validate_address(&customer.address, customer.is_delivery),
        OrderField::Toppings => validate_toppings(&order.toppings),
    }
}

/// Validates the whole form. An empty result means the order can be placed.
pub fn validate(customer: &CustomerInfo, order: &PizzaOrder) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in OrderField::ALL {
        if let Err(err) = validate_field(field, customer, order) {
            errors.record(err);
        }
    }
    errors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Topping;

    fn valid_customer() -> CustomerInfo {
        CustomerInfo {
            name: "Jane Doe".to_string(),
            phone: "555-123-4567".to_string(),
            email: "jane@example.com".to_string(),
            address: "1 Main St".to_string(),
            is_delivery: true,
        }
    }

    fn pizza_with_pepperoni() -> PizzaOrder {
        let mut pizza = PizzaOrder::default();
        pizza.toppings.insert(Topping::Pepperoni);
        pizza
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Al").is_ok());
        assert!(validate_name("Jane Doe").is_ok());

        assert_eq!(validate_name(""), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name("A"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name("   B   "), Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_validate_name_counts_characters() {
        // one character, two UTF-16 units
        assert_eq!(validate_name("😀"), Err(ValidationError::NameTooShort));
        assert!(validate_name("李明").is_ok());
        assert!(validate_name("😀😀").is_ok());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("555-123-4567").is_ok());
        assert!(validate_phone("+1 (555) 123 4567").is_ok());
        assert!(validate_phone("5551234567").is_ok());
        // whitespace does not count toward the minimum
        assert_eq!(
            validate_phone("555 123 45"),
            Err(ValidationError::PhoneInvalid)
        );

        assert_eq!(validate_phone(""), Err(ValidationError::PhoneRequired));
        assert_eq!(validate_phone(" \t "), Err(ValidationError::PhoneRequired));
        assert_eq!(validate_phone("555-1234"), Err(ValidationError::PhoneInvalid));
        assert_eq!(
            validate_phone("555.123.4567"),
            Err(ValidationError::PhoneInvalid)
        );
    }

    #[test]
    fn test_validate_phone_rejects_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits
        assert_eq!(
            validate_phone("\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}\u{0666}\u{0667}\u{0668}\u{0669}\u{0660}"),
            Err(ValidationError::PhoneInvalid)
        );
        assert_eq!(
            validate_phone("５５５-１２３-４５６７"),
            Err(ValidationError::PhoneInvalid)
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("j.doe+pizza@mail.example.org").is_ok());

        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("   "), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("jane"), Err(ValidationError::EmailInvalid));
        assert_eq!(
            validate_email("jane@example"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_email("jane@@example.com"),
            Err(ValidationError::EmailInvalid)
        );
        assert_eq!(
            validate_email(" jane@example.com"),
            Err(ValidationError::EmailInvalid)
        );
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("1 Main St", true).is_ok());
        assert!(validate_address("", false).is_ok());
        assert_eq!(
            validate_address("  ", true),
            Err(ValidationError::AddressRequired)
        );
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&valid_customer(), &pizza_with_pepperoni());
        assert!(errors.is_empty());
        assert_eq!(errors.first(), None);
    }

    #[test]
    fn test_empty_form_errors() {
        let errors = validate(&CustomerInfo::default(), &PizzaOrder::default());

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(OrderField::Name), Some("Please enter your full name"));
        assert_eq!(errors.get(OrderField::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(OrderField::Email), Some("Email address is required"));
        assert_eq!(errors.get(OrderField::Address), Some("Delivery address is required"));
        assert_eq!(
            errors.get(OrderField::Toppings),
            Some("Please select at least one topping")
        );
        assert_eq!(errors.first(), Some(OrderField::Name));
    }

    #[test]
    fn test_pickup_skips_address() {
        let customer = CustomerInfo {
            address: String::new(),
            is_delivery: false,
            ..valid_customer()
        };
        let errors = validate(&customer, &pizza_with_pepperoni());
        assert!(!errors.contains(OrderField::Address));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_toppings_error_iff_none_selected() {
        let customer = valid_customer();
        let mut pizza = PizzaOrder::default();
        assert!(validate(&customer, &pizza).contains(OrderField::Toppings));

        for topping in Topping::ALL {
            pizza.toppings.insert(topping);
            assert!(!validate(&customer, &pizza).contains(OrderField::Toppings));
        }
    }

    #[test]
    fn test_single_failing_field() {
        let customer = CustomerInfo {
            name: "A".to_string(),
            ..valid_customer()
        };
        let errors = validate(&customer, &pizza_with_pepperoni());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(OrderField::Name), Some("Please enter your full name"));
    }

    #[test]
    fn test_first_follows_document_order() {
        let customer = CustomerInfo {
            email: "nope".to_string(),
            address: String::new(),
            ..valid_customer()
        };
        let errors = validate(&customer, &PizzaOrder::default());
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![OrderField::Email, OrderField::Address, OrderField::Toppings]
        );
        assert_eq!(errors.first(), Some(OrderField::Email));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let customer = CustomerInfo {
            phone: "12".to_string(),
            ..CustomerInfo::default()
        };
        let pizza = PizzaOrder::default();
        assert_eq!(validate(&customer, &pizza), validate(&customer, &pizza));
    }

    #[test]
    fn test_validate_field_matches_full_pass() {
        let customer = CustomerInfo {
            phone: "abc".to_string(),
            ..valid_customer()
        };
        let pizza = PizzaOrder::default();
        let full = validate(&customer, &pizza);

        for field in OrderField::ALL {
            let single = validate_field(field, &customer, &pizza).err();
            assert_eq!(
                single.map(|e| e.to_string()).as_deref(),
                full.get(field),
                "{field}"
            );
        }
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::new();
        errors.record(ValidationError::NoToppings);
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"toppings":"Please select at least one topping"}"#);
    }
}
