//! # Storefront Configuration
//!
//! Settings read once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`NEXA_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after [`crate::Storefront::open`].

use std::path::PathBuf;

use directories::ProjectDirs;
use nexa_core::Money;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// File name of the local storage database.
pub const STORAGE_FILE_NAME: &str = "storefront.db";

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Path of the SQLite file backing the key-value area.
    pub storage_path: PathBuf,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Delivery fee added to every order.
    /// Default: zero (free delivery)
    pub delivery_fee: Money,
}

impl Default for StorefrontConfig {
    /// ## Default Values
    /// - Storage: `<platform data dir>/storefront.db`
    /// - Currency: INR (₹)
    /// - Delivery: free
    fn default() -> Self {
        StorefrontConfig {
            storage_path: default_storage_path(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            delivery_fee: Money::zero(),
        }
    }
}

impl StorefrontConfig {
    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `NEXA_DB_PATH`: storage file path
    /// - `NEXA_CURRENCY_CODE`: e.g. "INR"
    /// - `NEXA_CURRENCY_SYMBOL`: e.g. "₹"
    /// - `NEXA_DELIVERY_FEE`: delivery fee in minor units (e.g. "4900")
    pub fn from_env() -> Self {
        let mut config = StorefrontConfig::default();

        if let Ok(path) = std::env::var("NEXA_DB_PATH") {
            config.storage_path = PathBuf::from(path);
        }

        if let Ok(code) = std::env::var("NEXA_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Ok(symbol) = std::env::var("NEXA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(fee) = std::env::var("NEXA_DELIVERY_FEE") {
            match fee.trim().parse::<i64>() {
                Ok(minor) if minor >= 0 => config.delivery_fee = Money::from_minor(minor),
                _ => warn!(value = %fee, "Ignoring invalid NEXA_DELIVERY_FEE"),
            }
        }

        config
    }

    /// Same configuration with a different storage path.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(Money::from_minor(134_900)), "₹1349.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

/// Platform data directory for the storage file.
///
/// - **macOS**: `~/Library/Application Support/com.shopnexa.storefront/storefront.db`
/// - **Windows**: `%APPDATA%\shopnexa\storefront\data\storefront.db`
/// - **Linux**: `~/.local/share/storefront/storefront.db`
///
/// Falls back to the working directory when no home directory is known.
fn default_storage_path() -> PathBuf {
    ProjectDirs::from("com", "shopnexa", "storefront")
        .map(|dirs| dirs.data_dir().join(STORAGE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(STORAGE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.currency_code, "INR");
        assert!(config.delivery_fee.is_zero());
        assert!(config.storage_path.ends_with(STORAGE_FILE_NAME));
    }

    #[test]
    fn test_format_currency() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_currency(Money::from_minor(134_900)), "₹1349.00");
        assert_eq!(config.format_currency(Money::from_minor(5)), "₹0.05");
        assert_eq!(config.format_currency(Money::from_minor(-1_250)), "-₹12.50");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(StorefrontConfig::default()).unwrap();
        assert_eq!(json["currencySymbol"], "₹");
        assert_eq!(json["deliveryFee"], 0);
    }
}
