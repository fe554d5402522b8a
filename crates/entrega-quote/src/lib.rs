//! Delivery quoting: validates a customer address, geocodes it, measures the
//! distance from the store and prices it.
//!
//! The geocoder is injected through the [`Geocoder`] trait so the flow can
//! run against stubs.

pub mod error;
pub mod flow;
pub mod geocoder;

pub use error::{GeocodingFailureKind, QuoteError};
pub use flow::{pickup_quote, quote_for_option, resolve_delivery};
pub use geocoder::Geocoder;
