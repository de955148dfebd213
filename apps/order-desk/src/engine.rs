//! # Order Engine
//!
//! Owns the form (customer, pizza, submission state) and runs the
//! submission state machine.
//!
//! ## Submission Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  submit   ┌────────────┐  errors   ┌──────────┐          │
//! │  │   Idle   │──────────►│ Validating │──────────►│ Rejected │──► Idle  │
//! │  │ (edits)  │           └─────┬──────┘           └──────────┘          │
//! │  └──────────┘                 │ no errors                               │
//! │       ▲                       ▼                                         │
//! │       │               ┌──────────────┐  sink Ok   ┌──────────────────┐ │
//! │       │               │  Submitting  │───────────►│ Idle (form reset)│ │
//! │       │               │ is_submitting│            └──────────────────┘ │
//! │       │               └──────┬───────┘  sink Err  ┌──────────────────┐ │
//! │       └──────────────────────┴───────────────────►│ Idle (form kept) │ │
//! │                                                    └──────────────────┘ │
//! │                                                                         │
//! │  submit while Submitting ──► AlreadySubmitting (sink not called)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `submit` runs the whole cycle. Hosts that keep processing events while the
//! sink is pending use `begin_submission` / `complete_submission` instead, and
//! `abandon_submission` if they give up on the sink.
//!
//! A `submit` future dropped mid-flight (timeout, `select!`, panicking sink)
//! leaves the engine Idle with the form kept.

use std::sync::Arc;

use chrono::Utc;
use pizza_core::{
    pricing, validation, CoreError, CoreResult, Crust, CustomerInfo, FieldErrors, OrderField,
    OrderRecord, PizzaOrder, PizzaSize, PriceBreakdown, Topping, ToppingSet, ORDER_ID_RANGE,
};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::sink::{OrderSink, SinkError};
use crate::state::{DeskConfig, FormState, SubmissionPhase};

// =============================================================================
// Field Edits
// =============================================================================

/// One discrete edit from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Phone(String),
    Email(String),
    Address(String),
    /// Delivery (true) or pickup (false).
    Delivery(bool),
    Size(PizzaSize),
    Crust(Crust),
    /// A single topping checkbox.
    Topping { topping: Topping, selected: bool },
    /// The whole topping selection at once.
    Toppings(ToppingSet),
    SpecialInstructions(String),
}

impl FieldEdit {
    /// Parses a form field name and its raw input value.
    ///
    /// Field names are the form's (camelCase) names. `toppings` takes a comma
    /// separated selection; `isDelivery` takes `true`/`false` or
    /// `delivery`/`pickup`.
    pub fn parse(field: &str, value: &str) -> CoreResult<Self> {
        match field.trim() {
            "name" => Ok(FieldEdit::Name(value.to_string())),
            "phone" => Ok(FieldEdit::Phone(value.to_string())),
            "email" => Ok(FieldEdit::Email(value.to_string())),
            "address" => Ok(FieldEdit::Address(value.to_string())),
            "isDelivery" => parse_delivery(value).map(FieldEdit::Delivery),
            "size" => value.parse().map(FieldEdit::Size),
            "crust" => value.parse().map(FieldEdit::Crust),
            "toppings" => value.parse().map(FieldEdit::Toppings),
            "specialInstructions" => Ok(FieldEdit::SpecialInstructions(value.to_string())),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }

    /// The error entry this edit makes stale.
    ///
    /// The delivery toggle owns the address entry: switching to pickup makes
    /// the address optional, switching back must not show an old message.
    pub fn error_field(&self) -> Option<OrderField> {
        match self {
            FieldEdit::Name(_) => Some(OrderField::Name),
            FieldEdit::Phone(_) => Some(OrderField::Phone),
            FieldEdit::Email(_) => Some(OrderField::Email),
            FieldEdit::Address(_) | FieldEdit::Delivery(_) => Some(OrderField::Address),
            FieldEdit::Topping { .. } | FieldEdit::Toppings(_) => Some(OrderField::Toppings),
            FieldEdit::Size(_) | FieldEdit::Crust(_) | FieldEdit::SpecialInstructions(_) => None,
        }
    }
}

fn parse_delivery(value: &str) -> CoreResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "delivery" => Ok(true),
        "false" | "pickup" => Ok(false),
        _ => Err(CoreError::InvalidValue {
            field: "isDelivery".to_string(),
            value: value.to_string(),
        }),
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// How the customer gets the pizza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Fulfillment {
    Delivery {
        address: String,
    },
    Pickup {
        #[serde(rename = "storeName")]
        store_name: String,
    },
}

impl Fulfillment {
    /// Confirmation line ("Delivery to: 1 Main St").
    pub fn line(&self) -> String {
        match self {
            Fulfillment::Delivery { address } => format!("Delivery to: {}", address),
            Fulfillment::Pickup { store_name } => format!("Ready for pickup at {}", store_name),
        }
    }
}

/// Success acknowledgment shown after the order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: u32,
    /// Full order total, two-digit decimal ("25.98").
    pub total: String,
    /// Full order total with currency symbol ("$25.98").
    pub total_display: String,
    pub fulfillment: Fulfillment,
    pub customer_name: String,
    pub estimated_window: String,
}

impl OrderConfirmation {
    /// The acknowledgment text shown to the customer.
    pub fn message(&self) -> String {
        format!(
            "Order placed successfully!\n\nOrder ID: {}\nTotal: {}\n{}\nThank you, {}",
            self.order_id,
            self.total_display,
            self.fulfillment.line(),
            self.customer_name
        )
    }
}

/// Validation blocked the submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub errors: FieldErrors,
    /// The topmost errored field; the form scrolls it into view.
    pub first_field: OrderField,
}

/// The order sink failed. The form keeps its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFailure {
    /// Generic retry message for the customer.
    pub message: String,
    /// What the sink reported, for logs and support.
    pub reason: String,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmitOutcome {
    Placed(OrderConfirmation),
    Rejected(Rejection),
    Failed(SubmissionFailure),
    /// A submission is already in flight; nothing was done.
    AlreadySubmitting,
}

impl SubmitOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, SubmitOutcome::Placed(_))
    }
}

/// An order that passed validation and is waiting on the sink.
///
/// Only `OrderEngine::begin_submission` creates one, and it is consumed by
/// `complete_submission`.
#[derive(Debug)]
pub struct PendingSubmission {
    record: OrderRecord,
}

impl PendingSubmission {
    pub fn record(&self) -> &OrderRecord {
        &self.record
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// The order summary panel next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// "Large Pizza with Thin Crust"
    pub description: String,
    pub pizza_price: String,
    /// "Toppings: pepperoni, olives"; absent with no toppings.
    pub toppings_line: Option<String>,
    pub toppings_price: Option<String>,
    /// Absent for pickup.
    pub delivery_fee: Option<String>,
    pub total: String,
    pub estimated_window: String,
}

// =============================================================================
// Order Engine
// =============================================================================

/// The order form's state and operations.
///
/// ## Invariants
/// - `is_submitting` is true only between `begin_submission` and
///   `complete_submission`
/// - Customer and pizza are reset to defaults only after a placed order
pub struct OrderEngine {
    customer: CustomerInfo,
    pizza: PizzaOrder,
    form: FormState,
    config: DeskConfig,
    sink: Arc<dyn OrderSink>,
}

impl OrderEngine {
    /// Creates an engine with an empty form.
    pub fn new(config: DeskConfig, sink: Arc<dyn OrderSink>) -> Self {
        OrderEngine {
            customer: CustomerInfo::default(),
            pizza: PizzaOrder::default(),
            form: FormState::new(),
            config,
            sink,
        }
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn pizza(&self) -> &PizzaOrder {
        &self.pizza
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.form.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.form.phase()
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------------

    /// Applies one field edit and clears that field's stale error.
    pub fn apply(&mut self, edit: FieldEdit) {
        if let Some(field) = edit.error_field() {
            if self.form.clear_field_error(field) {
                debug!(%field, "Cleared stale field error");
            }
        }

        match edit {
            FieldEdit::Name(name) => self.customer.name = name,
            FieldEdit::Phone(phone) => self.customer.phone = phone,
            FieldEdit::Email(email) => self.customer.email = email,
            FieldEdit::Address(address) => self.customer.address = address,
            FieldEdit::Delivery(is_delivery) => self.customer.is_delivery = is_delivery,
            FieldEdit::Size(size) => self.pizza.size = size,
            FieldEdit::Crust(crust) => self.pizza.crust = crust,
            FieldEdit::Topping { topping, selected } => self.pizza.toppings.set(topping, selected),
            FieldEdit::Toppings(toppings) => self.pizza.toppings = toppings,
            FieldEdit::SpecialInstructions(text) => self.pizza.set_special_instructions(&text),
        }
    }

    /// Parses and applies a raw `field = value` edit from the form.
    pub fn apply_input(&mut self, field: &str, value: &str) -> CoreResult<()> {
        let edit = FieldEdit::parse(field, value)?;
        self.apply(edit);
        Ok(())
    }

    pub fn clear_field_error(&mut self, field: OrderField) -> bool {
        self.form.clear_field_error(field)
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks one field (e.g. on blur). Returns its message, if any.
    pub fn revalidate_field(&mut self, field: OrderField) -> Option<&str> {
        let result = validation::validate_field(field, &self.customer, &self.pizza);
        self.form.set_field_result(field, result);
        self.form.errors.get(field)
    }

    /// Full validation pass. Replaces the whole error mapping.
    pub fn revalidate_all(&mut self) -> &FieldErrors {
        let errors = validation::validate(&self.customer, &self.pizza);
        self.form.replace_errors(errors);
        &self.form.errors
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Size + crust, e.g. "19.99".
    pub fn pizza_only_price(&self) -> String {
        pricing::price_of_pizza_only(&self.pizza)
    }

    /// Everything including toppings and delivery, e.g. "25.98".
    pub fn total_price(&self) -> String {
        pricing::price_of_full_order(&self.pizza, self.customer.is_delivery)
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::compute(&self.pizza, self.customer.is_delivery)
    }

    pub fn summary(&self) -> OrderSummary {
        let breakdown = self.breakdown();
        let has_toppings = !self.pizza.toppings.is_empty();

        OrderSummary {
            description: self.pizza.description(),
            pizza_price: self.config.format_currency(breakdown.pizza_only),
            toppings_line: has_toppings
                .then(|| format!("Toppings: {}", self.pizza.toppings.joined())),
            toppings_price: has_toppings.then(|| self.config.format_currency(breakdown.toppings)),
            delivery_fee: self
                .customer
                .is_delivery
                .then(|| self.config.format_currency(breakdown.delivery)),
            total: self.config.format_currency(breakdown.total),
            estimated_window: self.customer.estimated_window().to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validates and, if the form is clean, enters Submitting.
    ///
    /// ## Returns
    /// - `Ok(PendingSubmission)`: hand `pending.record()` to the sink, then
    ///   call `complete_submission`
    /// - `Err(SubmitOutcome::AlreadySubmitting)`: nothing changed
    /// - `Err(SubmitOutcome::Rejected(_))`: errors are now in the form state
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitOutcome> {
        if self.form.is_submitting {
            debug!("Submit ignored, order already in flight");
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        let errors = self.revalidate_all().clone();
        if let Some(first_field) = errors.first() {
            info!(
                errors = errors.len(),
                %first_field,
                "Order rejected by validation"
            );
            return Err(SubmitOutcome::Rejected(Rejection {
                errors,
                first_field,
            }));
        }

        self.form.is_submitting = true;

        let order_id = rand::thread_rng().gen_range(0..ORDER_ID_RANGE);
        let record = OrderRecord::new(order_id, &self.customer, &self.pizza, Utc::now());
        debug!(order_id, "Order validated, submitting");

        Ok(PendingSubmission { record })
    }

    /// Leaves Submitting with the sink's result.
    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        result: Result<(), SinkError>,
    ) -> SubmitOutcome {
        self.form.is_submitting = false;
        let record = pending.record;

        match result {
            Ok(()) => {
                let confirmation = self.confirmation_for(&record);
                info!(
                    order_id = record.order_id,
                    total = %confirmation.total,
                    delivery = record.customer.is_delivery,
                    "Order placed"
                );
                self.reset();
                SubmitOutcome::Placed(confirmation)
            }
            Err(err) => {
                warn!(order_id = record.order_id, error = %err, "Order submission failed");
                SubmitOutcome::Failed(SubmissionFailure {
                    message: format!(
                        "Sorry, there was a problem placing your order. Please try again or call {}",
                        self.config.store_name
                    ),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Leaves Submitting without an answer from the sink. The form is kept.
    pub fn abandon_submission(&mut self, pending: PendingSubmission) {
        self.form.is_submitting = false;
        warn!(
            order_id = pending.record.order_id,
            "Order submission abandoned"
        );
    }

    /// Validates, places the order through the sink, and reports back.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let pending = match self.begin_submission() {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };

        let sink = Arc::clone(&self.sink);
        let mut guard = SubmittingGuard {
            engine: self,
            armed: true,
        };
        let result = sink.place_order(pending.record()).await;
        guard.armed = false;
        guard.engine.complete_submission(pending, result)
    }

    fn confirmation_for(&self, record: &OrderRecord) -> OrderConfirmation {
        let customer = &record.customer;
        let fulfillment = if customer.is_delivery {
            Fulfillment::Delivery {
                address: customer.address.clone(),
            }
        } else {
            Fulfillment::Pickup {
                store_name: self.config.store_name.clone(),
            }
        };

        OrderConfirmation {
            order_id: record.order_id,
            total: record.total().to_decimal_string(),
            total_display: self.config.format_currency(record.total()),
            fulfillment,
            customer_name: customer.name.clone(),
            estimated_window: record.estimated_window.clone(),
        }
    }

    /// Back to an empty form.
    fn reset(&mut self) {
        self.customer = CustomerInfo::default();
        self.pizza = PizzaOrder::default();
        self.form.errors = FieldErrors::new();
    }
}

/// Clears `is_submitting` if `submit` is dropped or unwinds while the sink
/// is pending.
struct SubmittingGuard<'a> {
    engine: &'a mut OrderEngine,
    armed: bool,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.engine.form.is_submitting = false;
            warn!("Order submission dropped before the sink answered");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
