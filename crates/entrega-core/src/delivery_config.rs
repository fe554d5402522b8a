//! Per-deployment delivery settings: store location, country suffix and
//! pricing, loaded from YAML.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::address::Address;
use crate::geo::Coordinates;
use crate::pricing::PricingPolicy;
use crate::quote::StoreLocation;
use crate::ConfigError;

/// Country appended to every geocoding query unless the config overrides it.
pub const DEFAULT_COUNTRY: &str = "Brasil";

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryConfig {
    pub country: String,
    pub store: StoreLocation,
    pub pricing: PricingPolicy,
}

#[derive(Debug, Deserialize)]
struct DeliveryFile {
    #[serde(default = "default_country")]
    country: String,
    store: StoreEntry,
    pricing: PricingPolicy,
}

#[derive(Debug, Deserialize)]
struct StoreEntry {
    address: Address,
    latitude: f64,
    longitude: f64,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl DeliveryConfig {
    /// Settings compiled into the binary, used when no config file exists.
    ///
    /// Callers should log when they fall back to this so a stale store
    /// address never goes unnoticed.
    #[must_use]
    pub fn builtin_default() -> Self {
        let address = Address {
            street: "Rua Arcílio Federzoni".to_string(),
            number: "971".to_string(),
            complement: None,
            neighborhood: Some("Jardim Silva".to_string()),
            city: "Francisco Morato".to_string(),
            state: "SP".to_string(),
        };
        let coordinates = Coordinates::from_static(-23.4607, -46.3292)
            .with_label(address.full_text(DEFAULT_COUNTRY));

        Self {
            country: default_country(),
            store: StoreLocation {
                address,
                coordinates,
            },
            pricing: PricingPolicy::new(Decimal::new(500, 2), Decimal::new(150, 2), None),
        }
    }

    /// Parses and validates YAML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DeliveryFileParse`] for malformed YAML and
    /// [`ConfigError::Validation`] for an incomplete store address, invalid
    /// store coordinates, or an invalid pricing policy.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let file: DeliveryFile = serde_yaml::from_str(content)?;
        Self::from_file(file)
    }

    fn from_file(file: DeliveryFile) -> Result<Self, ConfigError> {
        if file.country.trim().is_empty() {
            return Err(ConfigError::Validation(
                "country must be non-empty".to_string(),
            ));
        }

        let missing = file.store.address.missing_required_fields();
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            return Err(ConfigError::Validation(format!(
                "store address is missing: {}",
                names.join(", ")
            )));
        }

        let coordinates = Coordinates::new(file.store.latitude, file.store.longitude)
            .map_err(|e| ConfigError::Validation(format!("store coordinates: {e}")))?
            .with_label(file.store.address.full_text(&file.country));

        file.pricing.validate()?;

        Ok(Self {
            country: file.country,
            store: StoreLocation {
                address: file.store.address,
                coordinates,
            },
            pricing: file.pricing,
        })
    }
}

/// Load and validate the delivery configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_delivery_config(path: &Path) -> Result<DeliveryConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DeliveryFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    DeliveryConfig::from_yaml(&content)
}

#[cfg(test)]
#[path = "delivery_config_test.rs"]
mod tests;
