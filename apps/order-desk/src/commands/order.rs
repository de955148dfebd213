//! # Order Commands

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::{FieldEdit, OrderEngine, OrderSummary, SubmitOutcome};
use crate::error::ApiError;
use pizza_core::{CoreResult, Topping, ToppingSet};

/// A complete order as sent by a client in one piece.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub customer: CustomerRequest,
    #[serde(default)]
    pub pizza: PizzaRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub is_delivery: bool,
}

impl Default for CustomerRequest {
    fn default() -> Self {
        CustomerRequest {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            is_delivery: true,
        }
    }
}

/// Menu keys stay strings here so unknown values are reported, not dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PizzaRequest {
    pub size: Option<String>,
    pub crust: Option<String>,
    pub toppings: Vec<String>,
    pub special_instructions: String,
}

impl OrderRequest {
    /// The field edits that fill an empty form with this request.
    pub fn edits(&self) -> CoreResult<Vec<FieldEdit>> {
        let customer = &self.customer;
        let pizza = &self.pizza;

        let mut edits = vec![
            FieldEdit::Name(customer.name.clone()),
            FieldEdit::Phone(customer.phone.clone()),
            FieldEdit::Email(customer.email.clone()),
            FieldEdit::Address(customer.address.clone()),
            FieldEdit::Delivery(customer.is_delivery),
        ];

        if let Some(size) = &pizza.size {
            edits.push(FieldEdit::parse("size", size)?);
        }
        if let Some(crust) = &pizza.crust {
            edits.push(FieldEdit::parse("crust", crust)?);
        }

        let toppings = pizza
            .toppings
            .iter()
            .map(|name| name.parse::<Topping>())
            .collect::<CoreResult<ToppingSet>>()?;
        edits.push(FieldEdit::Toppings(toppings));
        edits.push(FieldEdit::SpecialInstructions(
            pizza.special_instructions.clone(),
        ));

        Ok(edits)
    }
}

/// Outcome plus the text a client shows for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub outcome: SubmitOutcome,
    pub message: String,
}

impl From<SubmitOutcome> for PlaceOrderResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        let message = match &outcome {
            SubmitOutcome::Placed(confirmation) => confirmation.message(),
            SubmitOutcome::Rejected(rejection) => rejection
                .errors
                .get(rejection.first_field)
                .unwrap_or_default()
                .to_string(),
            SubmitOutcome::Failed(failure) => failure.message.clone(),
            SubmitOutcome::AlreadySubmitting => "Your order is already being placed".to_string(),
        };
        PlaceOrderResponse { outcome, message }
    }
}

/// Fills the form from the request. Nothing is applied if a menu key is
/// unknown.
pub fn load_request(engine: &mut OrderEngine, request: &OrderRequest) -> Result<(), ApiError> {
    let edits = request.edits()?;
    debug!(edits = edits.len(), "load_request command");

    for edit in edits {
        engine.apply(edit);
    }
    Ok(())
}

pub fn get_summary(engine: &OrderEngine) -> OrderSummary {
    engine.summary()
}

/// Loads the request into the form and submits it.
pub async fn place_order(
    engine: &mut OrderEngine,
    request: &OrderRequest,
) -> Result<PlaceOrderResponse, ApiError> {
    load_request(engine, request)?;
    let outcome = engine.submit().await;
    Ok(outcome.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::sink::LoggingSink;
    use crate::state::DeskConfig;
    use pizza_core::{Crust, PizzaSize};
    use std::sync::Arc;

    fn engine() -> OrderEngine {
        OrderEngine::new(DeskConfig::default(), Arc::new(LoggingSink))
    }

    fn jane_request() -> OrderRequest {
        serde_json::from_str(
            r#"{
                "customer": {
                    "name": "Jane Doe",
                    "phone": "555-123-4567",
                    "email": "jane@example.com",
                    "address": "1 Main St",
                    "isDelivery": true
                },
                "pizza": {
                    "size": "large",
                    "crust": "thin",
                    "toppings": ["pepperoni", "olives"]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_load_request_fills_form() {
        let mut engine = engine();
        load_request(&mut engine, &jane_request()).unwrap();

        assert_eq!(engine.customer().name, "Jane Doe");
        assert_eq!(engine.pizza().size, PizzaSize::Large);
        assert_eq!(engine.pizza().crust, Crust::Thin);
        assert_eq!(get_summary(&engine).total, "$25.98");
    }

    #[test]
    fn test_missing_sections_use_form_defaults() {
        let request: OrderRequest = serde_json::from_str("{}").unwrap();
        let mut engine = engine();
        load_request(&mut engine, &request).unwrap();

        assert!(engine.customer().is_delivery);
        assert_eq!(engine.pizza().size, PizzaSize::Medium);
        assert!(engine.pizza().toppings.is_empty());
    }

    #[test]
    fn test_unknown_topping_applies_nothing() {
        let mut request = jane_request();
        request.pizza.toppings.push("pineapple".to_string());
        let mut engine = engine();

        let err = load_request(&mut engine, &request).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, "Unknown topping: pineapple");
        assert_eq!(engine.customer().name, "");
    }

    #[tokio::test]
    async fn test_place_order_placed() {
        let mut engine = engine();
        let response = place_order(&mut engine, &jane_request()).await.unwrap();

        assert!(response.outcome.is_placed());
        assert!(response.message.starts_with("Order placed successfully!"));
        assert!(response.message.contains("Total: $25.98"));
    }

    #[tokio::test]
    async fn test_place_order_rejected_message() {
        let mut request = jane_request();
        request.pizza.toppings.clear();
        let mut engine = engine();

        let response = place_order(&mut engine, &request).await.unwrap();
        assert!(matches!(response.outcome, SubmitOutcome::Rejected(_)));
        assert_eq!(response.message, "Please select at least one topping");
    }
}
