//! Domain types and pure calculations for delivery-fee estimation.
//!
//! Holds the address and coordinate model, the great-circle distance
//! calculator, the distance-to-fee pricing rule, and configuration loading
//! (environment variables plus the YAML delivery config).

pub mod address;
pub mod app_config;
pub mod config;
pub mod delivery_config;
pub mod error;
pub mod geo;
pub mod pricing;
pub mod quote;

pub use address::{Address, RequiredField};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use delivery_config::{load_delivery_config, DeliveryConfig, DEFAULT_COUNTRY};
pub use error::{ConfigError, CoordinateError};
pub use geo::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use pricing::PricingPolicy;
pub use quote::{format_brl, DeliveryOption, DeliveryQuote, StoreLocation};
