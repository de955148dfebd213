//! # Configuration State
//!
//! Desk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ORDER_DESK_*`)
//! 2. Defaults (this file)
//!
//! Prices are not configuration: the menu tables in `pizza_core::pricing`
//! are fixed.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use pizza_core::Money;
use serde::{Deserialize, Serialize};

/// Store name used in pickup confirmations and the failure message.
pub const DEFAULT_STORE_NAME: &str = "Mario's Pizza";

const STORE_NAME_VAR: &str = "ORDER_DESK_STORE_NAME";
const CURRENCY_SYMBOL_VAR: &str = "ORDER_DESK_CURRENCY_SYMBOL";

/// Order desk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskConfig {
    /// Shown as "Ready for pickup at {store_name}" and in the
    /// "please call {store_name}" failure message.
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl DeskConfig {
    /// Creates a DeskConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ORDER_DESK_STORE_NAME`: Override store name
    /// - `ORDER_DESK_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value lookup. Blank values are
    /// ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DeskConfig::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = non_blank(STORE_NAME_VAR) {
            config.store_name = store_name.trim().to_string();
        }

        if let Some(symbol) = non_blank(CURRENCY_SYMBOL_VAR) {
            config.currency_symbol = symbol.trim().to_string();
        }

        config
    }

    /// Formats an amount with the configured symbol ("$24.48").
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}
