//! Forward geocoding against a Nominatim-compatible `/search` endpoint.
//!
//! One request per lookup, first match wins, no retries. Callers decide what
//! to do with a failure; [`GeocoderError::is_not_found`] and
//! [`GeocoderError::is_transient`] tell the two kinds apart.

use entrega_core::Coordinates;
use reqwest::{Client, Url};

use crate::error::GeocoderError;
use crate::http::{build_client, get_text, parse_base_url};
use crate::types::NominatimPlace;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Client for a Nominatim-compatible geocoding API.
///
/// Use [`NominatimClient::new`] for the public OpenStreetMap instance or
/// [`NominatimClient::with_base_url`] for a self-hosted one or a mock
/// server in tests.
pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// Creates a client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocoderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocoderError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeocoderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocoderError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocoderError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Resolves a free-text address to the best matching coordinates.
    ///
    /// The returned [`Coordinates`] carry the service's `display_name` as
    /// their label.
    ///
    /// # Errors
    ///
    /// - [`GeocoderError::NoMatch`] if the service returns an empty result list.
    /// - [`GeocoderError::Http`] / [`GeocoderError::UnexpectedStatus`] on
    ///   network failure or a non-2xx status.
    /// - [`GeocoderError::Deserialize`] / [`GeocoderError::Malformed`] if the
    ///   payload does not have the expected shape or values.
    pub async fn geocode(&self, query: &str) -> Result<Coordinates, GeocoderError> {
        let url = self.search_url(query)?;
        tracing::debug!(query, "geocoding address");

        let body = get_text(&self.client, &url).await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocoderError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        let Some(best) = places.into_iter().next() else {
            return Err(GeocoderError::NoMatch {
                query: query.to_owned(),
            });
        };

        let coordinates = place_to_coordinates(best, query)?;
        tracing::debug!(
            query,
            latitude = coordinates.latitude(),
            longitude = coordinates.longitude(),
            "geocoding matched"
        );
        Ok(coordinates)
    }

    /// Builds `{base}/search?q=...&format=jsonv2&limit=1` with the query
    /// percent-encoded.
    fn search_url(&self, query: &str) -> Result<Url, GeocoderError> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| GeocoderError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        Ok(url)
    }
}

fn place_to_coordinates(place: NominatimPlace, query: &str) -> Result<Coordinates, GeocoderError> {
    let malformed = |reason: String| GeocoderError::Malformed {
        context: format!("search(q={query})"),
        reason,
    };

    let latitude = place
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|e| malformed(format!("lat '{}': {e}", place.lat)))?;
    let longitude = place
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|e| malformed(format!("lon '{}': {e}", place.lon)))?;

    let coordinates =
        Coordinates::new(latitude, longitude).map_err(|e| malformed(e.to_string()))?;
    Ok(coordinates.with_label(place.display_name))
}
