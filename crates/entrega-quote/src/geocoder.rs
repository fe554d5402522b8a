use async_trait::async_trait;
use entrega_core::Coordinates;
use entrega_geocoder::{GeocoderError, NominatimClient};

/// Resolves free-text addresses to coordinates.
///
/// Implementations make at most one outbound lookup per call and never retry.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, address_text: &str) -> Result<Coordinates, GeocoderError>;
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn resolve(&self, address_text: &str) -> Result<Coordinates, GeocoderError> {
        self.geocode(address_text).await
    }
}
