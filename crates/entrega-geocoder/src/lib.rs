//! HTTP clients for the lookups that feed delivery quoting: forward
//! geocoding of free-text addresses and CEP postal-code pre-fill.

pub mod cep;
pub mod error;
pub mod geocode;
pub mod types;

mod http;

pub use cep::{normalize_cep, CepAddress, CepClient};
pub use error::GeocoderError;
pub use geocode::NominatimClient;
