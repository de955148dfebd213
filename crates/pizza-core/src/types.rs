//! # Domain Types
//!
//! Core domain types for the order form.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CustomerInfo   │   │   PizzaOrder    │   │   OrderRecord   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  size           │   │  order_id       │       │
//! │  │  phone          │   │  crust          │   │  customer  (↑)  │       │
//! │  │  email          │   │  toppings       │   │  pizza     (↑)  │       │
//! │  │  address        │   │  instructions   │   │  totals, time   │       │
//! │  │  is_delivery    │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   PizzaSize     │   │     Crust       │   │    Topping      │       │
//! │  │  small..xlarge  │   │ regular..stuffed│   │  catalog of 7   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Menu keys (sizes, crusts, toppings) are enums, so an unknown key can only
//! appear while parsing presentation input, where `FromStr` rejects it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;
use crate::pricing;
use crate::{DELIVERY_WINDOW, MAX_SPECIAL_INSTRUCTIONS_CHARS, PICKUP_WINDOW};

// =============================================================================
// Pizza Size
// =============================================================================

/// Pizza size. The base price is fixed per size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PizzaSize {
    /// 10" - $12.99
    Small,
    /// 12" - $15.99
    #[default]
    Medium,
    /// 14" - $18.99
    Large,
    /// 16" - $21.99
    #[serde(rename = "xlarge")]
    XLarge,
}

impl PizzaSize {
    /// Every size, in menu order.
    pub const ALL: [PizzaSize; 4] = [
        PizzaSize::Small,
        PizzaSize::Medium,
        PizzaSize::Large,
        PizzaSize::XLarge,
    ];

    /// Base price for a plain pizza of this size.
    pub const fn base_price(&self) -> Money {
        match self {
            PizzaSize::Small => Money::from_cents(1299),
            PizzaSize::Medium => Money::from_cents(1599),
            PizzaSize::Large => Money::from_cents(1899),
            PizzaSize::XLarge => Money::from_cents(2199),
        }
    }

    pub const fn diameter_inches(&self) -> u8 {
        match self {
            PizzaSize::Small => 10,
            PizzaSize::Medium => 12,
            PizzaSize::Large => 14,
            PizzaSize::XLarge => 16,
        }
    }

    /// Wire key ("xlarge").
    pub const fn key(&self) -> &'static str {
        match self {
            PizzaSize::Small => "small",
            PizzaSize::Medium => "medium",
            PizzaSize::Large => "large",
            PizzaSize::XLarge => "xlarge",
        }
    }

    /// Menu label ("X-Large").
    pub const fn label(&self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
            PizzaSize::XLarge => "X-Large",
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PizzaSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(PizzaSize::Small),
            "medium" => Ok(PizzaSize::Medium),
            "large" => Ok(PizzaSize::Large),
            "xlarge" | "x-large" => Ok(PizzaSize::XLarge),
            other => Err(CoreError::UnknownSize(other.to_string())),
        }
    }
}

// =============================================================================
// Crust
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Crust {
    #[default]
    Regular,
    Thin,
    Thick,
    Stuffed,
}

impl Crust {
    pub const ALL: [Crust; 4] = [Crust::Regular, Crust::Thin, Crust::Thick, Crust::Stuffed];

    /// Surcharge on top of the size's base price.
    pub const fn surcharge(&self) -> Money {
        match self {
            Crust::Regular => Money::zero(),
            Crust::Thin => Money::from_cents(100),
            Crust::Thick => Money::from_cents(200),
            Crust::Stuffed => Money::from_cents(300),
        }
    }

    pub const fn key(&self) -> &'static str {
        match self {
            Crust::Regular => "regular",
            Crust::Thin => "thin",
            Crust::Thick => "thick",
            Crust::Stuffed => "stuffed",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Crust::Regular => "Regular",
            Crust::Thin => "Thin",
            Crust::Thick => "Thick",
            Crust::Stuffed => "Stuffed",
        }
    }
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Crust {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(Crust::Regular),
            "thin" => Ok(Crust::Thin),
            "thick" => Ok(Crust::Thick),
            "stuffed" => Ok(Crust::Stuffed),
            other => Err(CoreError::UnknownCrust(other.to_string())),
        }
    }
}

// =============================================================================
// Toppings
// =============================================================================

/// A topping from the fixed catalog. Every topping costs the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Pepperoni,
    Sausage,
    Mushrooms,
    #[serde(rename = "green pepper")]
    GreenPepper,
    Onions,
    Olives,
    Jalapenos,
}

impl Topping {
    /// The catalog, in menu order.
    pub const ALL: [Topping; 7] = [
        Topping::Pepperoni,
        Topping::Sausage,
        Topping::Mushrooms,
        Topping::GreenPepper,
        Topping::Onions,
        Topping::Olives,
        Topping::Jalapenos,
    ];

    /// Catalog name, as shown in the summary line ("green pepper").
    pub const fn name(&self) -> &'static str {
        match self {
            Topping::Pepperoni => "pepperoni",
            Topping::Sausage => "sausage",
            Topping::Mushrooms => "mushrooms",
            Topping::GreenPepper => "green pepper",
            Topping::Onions => "onions",
            Topping::Olives => "olives",
            Topping::Jalapenos => "jalapenos",
        }
    }

    /// Checkbox label ("Green pepper").
    pub fn label(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topping {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Topping::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or(CoreError::UnknownTopping(wanted))
    }
}

/// Selected toppings.
///
/// ## Invariants
/// - No duplicates (inserting a selected topping is a no-op)
/// - Insertion order is kept for the summary line only; pricing uses `len()`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Topping>", into = "Vec<Topping>")]
pub struct ToppingSet(Vec<Topping>);

impl ToppingSet {
    pub fn new() -> Self {
        ToppingSet(Vec::new())
    }

    /// Adds a topping. Returns `false` if it was already selected.
    pub fn insert(&mut self, topping: Topping) -> bool {
        if self.contains(topping) {
            return false;
        }
        self.0.push(topping);
        true
    }

    /// Removes a topping. Returns `false` if it was not selected.
    pub fn remove(&mut self, topping: Topping) -> bool {
        let before = self.0.len();
        self.0.retain(|t| *t != topping);
        self.0.len() != before
    }

    /// Checkbox semantics: select or deselect.
    pub fn set(&mut self, topping: Topping, selected: bool) {
        if selected {
            self.insert(topping);
        } else {
            self.remove(topping);
        }
    }

    pub fn contains(&self, topping: Topping) -> bool {
        self.0.contains(&topping)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Topping> + '_ {
        self.0.iter().copied()
    }

    /// Summary line: names joined in selection order ("pepperoni, olives").
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(Topping::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Vec<Topping>> for ToppingSet {
    fn from(toppings: Vec<Topping>) -> Self {
        toppings.into_iter().collect()
    }
}

impl From<ToppingSet> for Vec<Topping> {
    fn from(set: ToppingSet) -> Self {
        set.0
    }
}

impl FromIterator<Topping> for ToppingSet {
    fn from_iter<I: IntoIterator<Item = Topping>>(iter: I) -> Self {
        let mut set = ToppingSet::new();
        for topping in iter {
            set.insert(topping);
        }
        set
    }
}

impl FromStr for ToppingSet {
    type Err = CoreError;

    /// Parses a comma separated selection ("pepperoni, green pepper").
    /// An empty string is an empty selection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Topping::from_str)
            .collect()
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// Contact and fulfillment details entered by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Only required when `is_delivery` is true.
    pub address: String,
    pub is_delivery: bool,
}

impl Default for CustomerInfo {
    /// Empty form, delivery selected.
    fn default() -> Self {
        CustomerInfo {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            is_delivery: true,
        }
    }
}

impl CustomerInfo {
    /// Estimated delivery or pickup window.
    pub fn estimated_window(&self) -> &'static str {
        estimated_window(self.is_delivery)
    }
}

/// "45-60 minutes" for delivery, "20-30 minutes" for pickup.
pub const fn estimated_window(is_delivery: bool) -> &'static str {
    if is_delivery {
        DELIVERY_WINDOW
    } else {
        PICKUP_WINDOW
    }
}

// =============================================================================
// Pizza Order
// =============================================================================

/// The pizza being built.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PizzaOrder {
    pub size: PizzaSize,
    pub crust: Crust,
    #[ts(as = "Vec<Topping>")]
    pub toppings: ToppingSet,
    /// At most `MAX_SPECIAL_INSTRUCTIONS_CHARS` characters when set through
    /// `set_special_instructions`.
    pub special_instructions: String,
}

impl PizzaOrder {
    /// Sets the special instructions, dropping anything past the cap.
    pub fn set_special_instructions(&mut self, text: &str) {
        self.special_instructions = text.chars().take(MAX_SPECIAL_INSTRUCTIONS_CHARS).collect();
    }

    /// Characters left before the instructions cap ("n/200 characters").
    pub fn instructions_remaining(&self) -> usize {
        MAX_SPECIAL_INSTRUCTIONS_CHARS.saturating_sub(self.special_instructions.chars().count())
    }

    /// Summary heading, e.g. "Large Pizza with Thin Crust".
    pub fn description(&self) -> String {
        format!("{} Pizza with {} Crust", self.size.label(), self.crust.label())
    }
}

// =============================================================================
// Order Field
// =============================================================================

/// A form field that can carry a validation error.
///
/// Variants are declared in document order, so the derived `Ord` puts the
/// topmost field first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Name,
    Phone,
    Email,
    Address,
    Toppings,
}

impl OrderField {
    pub const ALL: [OrderField; 5] = [
        OrderField::Name,
        OrderField::Phone,
        OrderField::Email,
        OrderField::Address,
        OrderField::Toppings,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderField::Name => "name",
            OrderField::Phone => "phone",
            OrderField::Email => "email",
            OrderField::Address => "address",
            OrderField::Toppings => "toppings",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderField::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

// =============================================================================
// Order Record
// =============================================================================

/// Snapshot handed to the order sink at submission time.
///
/// Uses the snapshot pattern: customer and pizza are frozen copies, so the
/// form can be reset while the record is still being logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Display-only confirmation number. Not unique.
    pub order_id: u32,
    pub customer: CustomerInfo,
    pub pizza: PizzaOrder,
    /// Pizza-only price (size + crust).
    pub item_total_cents: i64,
    /// Everything the customer pays, including toppings and delivery.
    pub total_cents: i64,
    #[ts(as = "String")]
    pub ordered_at: DateTime<Utc>,
    pub estimated_window: String,
}

impl OrderRecord {
    /// Freezes the current form into a record.
    pub fn new(
        order_id: u32,
        customer: &CustomerInfo,
        pizza: &PizzaOrder,
        ordered_at: DateTime<Utc>,
    ) -> Self {
        OrderRecord {
            order_id,
            customer: customer.clone(),
            pizza: pizza.clone(),
            item_total_cents: pricing::pizza_only_total(pizza).cents(),
            total_cents: pricing::full_order_total(pizza, customer.is_delivery).cents(),
            ordered_at,
            estimated_window: customer.estimated_window().to_string(),
        }
    }

    #[inline]
    pub fn item_total(&self) -> Money {
        Money::from_cents(self.item_total_cents)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
