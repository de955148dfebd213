//! # Pricing Module
//!
//! Order price computation. The tables are fixed; there is no external
//! configuration and no error path.
//!
//! ## Price Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   size base  ─┐                                                         │
//! │               ├──► pizza-only ──┐                                       │
//! │   crust  ─────┘                 │                                       │
//! │                                 ├──► full order total                   │
//! │   1.50 × toppings ──────────────┤                                       │
//! │   2.99 if delivery ─────────────┘   (never part of pizza-only)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::pricing::{price_of_full_order, price_of_pizza_only};
//! use pizza_core::{Crust, PizzaOrder, PizzaSize, Topping};
//!
//! let mut pizza = PizzaOrder {
//!     size: PizzaSize::Large,
//!     crust: Crust::Thin,
//!     ..Default::default()
//! };
//! pizza.toppings.insert(Topping::Pepperoni);
//!
//! assert_eq!(price_of_pizza_only(&pizza), "19.99");
//! assert_eq!(price_of_full_order(&pizza, true), "24.48");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::PizzaOrder;

/// Price of each selected topping.
pub const TOPPING_PRICE: Money = Money::from_cents(150);

/// Added to the full order total when delivering.
pub const DELIVERY_FEE: Money = Money::from_cents(299);

// =============================================================================
// Money Totals
// =============================================================================

/// Size base price plus crust surcharge.
pub fn pizza_only_total(order: &PizzaOrder) -> Money {
    order.size.base_price() + order.crust.surcharge()
}

pub fn toppings_total(order: &PizzaOrder) -> Money {
    TOPPING_PRICE.multiply_quantity(order.toppings.len() as i64)
}

pub fn delivery_fee(is_delivery: bool) -> Money {
    if is_delivery {
        DELIVERY_FEE
    } else {
        Money::zero()
    }
}

/// What the customer pays.
pub fn full_order_total(order: &PizzaOrder, is_delivery: bool) -> Money {
    pizza_only_total(order) + toppings_total(order) + delivery_fee(is_delivery)
}

// =============================================================================
// Boundary Strings
// =============================================================================

/// Pizza-only price as a two-digit decimal string ("19.99").
pub fn price_of_pizza_only(order: &PizzaOrder) -> String {
    pizza_only_total(order).to_decimal_string()
}

/// Full order price as a two-digit decimal string ("24.48").
pub fn price_of_full_order(order: &PizzaOrder, is_delivery: bool) -> String {
    full_order_total(order, is_delivery).to_decimal_string()
}

// =============================================================================
// Breakdown
// =============================================================================

/// Every line of the order summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: Money,
    pub crust: Money,
    pub pizza_only: Money,
    pub toppings: Money,
    pub topping_count: usize,
    pub delivery: Money,
    pub total: Money,
}

impl PriceBreakdown {
    pub fn compute(order: &PizzaOrder, is_delivery: bool) -> Self {
        PriceBreakdown {
            base: order.size.base_price(),
            crust: order.crust.surcharge(),
            pizza_only: pizza_only_total(order),
            toppings: toppings_total(order),
            topping_count: order.toppings.len(),
            delivery: delivery_fee(is_delivery),
            total: full_order_total(order, is_delivery),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Crust, PizzaSize, Topping, ToppingSet};

    fn pizza(size: PizzaSize, crust: Crust, toppings: &[Topping]) -> PizzaOrder {
        PizzaOrder {
            size,
            crust,
            toppings: toppings.iter().copied().collect::<ToppingSet>(),
            special_instructions: String::new(),
        }
    }

    #[test]
    fn test_pizza_only_every_size_and_crust() {
        let expected = [
            (PizzaSize::Small, ["12.99", "13.99", "14.99", "15.99"]),
            (PizzaSize::Medium, ["15.99", "16.99", "17.99", "18.99"]),
            (PizzaSize::Large, ["18.99", "19.99", "20.99", "21.99"]),
            (PizzaSize::XLarge, ["21.99", "22.99", "23.99", "24.99"]),
        ];

        for (size, prices) in expected {
            for (crust, price) in Crust::ALL.into_iter().zip(prices) {
                assert_eq!(
                    price_of_pizza_only(&pizza(size, crust, &[])),
                    price,
                    "{size:?} + {crust:?}"
                );
            }
        }
    }

    #[test]
    fn test_pizza_only_ignores_toppings() {
        let order = pizza(PizzaSize::Large, Crust::Stuffed, &Topping::ALL);
        assert_eq!(price_of_pizza_only(&order), "21.99");
    }

    #[test]
    fn test_full_order_by_topping_count() {
        for k in 0..=Topping::ALL.len() {
            let order = pizza(PizzaSize::Medium, Crust::Regular, &Topping::ALL[..k]);
            let pickup = 1599 + 150 * k as i64;
            assert_eq!(full_order_total(&order, false).cents(), pickup);
            assert_eq!(full_order_total(&order, true).cents(), pickup + 299);
        }
    }

    #[test]
    fn test_delivery_never_in_pizza_only() {
        let order = pizza(PizzaSize::Small, Crust::Regular, &[]);
        assert_eq!(price_of_pizza_only(&order), "12.99");
        assert_eq!(price_of_full_order(&order, true), "15.98");
        assert_eq!(price_of_full_order(&order, false), "12.99");
    }

    #[test]
    fn test_large_thin_two_toppings_delivered() {
        let order = pizza(
            PizzaSize::Large,
            Crust::Thin,
            &[Topping::Pepperoni, Topping::Olives],
        );
        assert_eq!(price_of_pizza_only(&order), "19.99");
        // 18.99 + 1.00 + 2 × 1.50 + 2.99
        assert_eq!(price_of_full_order(&order, true), "25.98");
        assert_eq!(price_of_full_order(&order, false), "22.99");
    }

    #[test]
    fn test_breakdown() {
        let order = pizza(PizzaSize::XLarge, Crust::Thick, &[Topping::Onions]);
        let breakdown = PriceBreakdown::compute(&order, true);

        assert_eq!(breakdown.base.cents(), 2199);
        assert_eq!(breakdown.crust.cents(), 200);
        assert_eq!(breakdown.pizza_only.cents(), 2399);
        assert_eq!(breakdown.toppings.cents(), 150);
        assert_eq!(breakdown.topping_count, 1);
        assert_eq!(breakdown.delivery.cents(), 299);
        assert_eq!(breakdown.total.cents(), 2848);
    }

    #[test]
    fn test_repeated_computation_is_stable() {
        let order = pizza(PizzaSize::Large, Crust::Thin, &[Topping::Olives]);
        let first = price_of_full_order(&order, true);
        for _ in 0..1000 {
            assert_eq!(price_of_full_order(&order, true), first);
        }
    }
}
