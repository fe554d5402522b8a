use entrega_core::{CoordinateError, RequiredField};
use entrega_geocoder::GeocoderError;
use thiserror::Error;

/// Why geocoding failed, as far as a caller deciding on a retry cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodingFailureKind {
    /// The service answered but found nothing for the address.
    NotFound,
    /// The service answered with a payload we could not use.
    Malformed,
    /// Network failure or an error status from the service.
    Upstream,
}

impl GeocodingFailureKind {
    #[must_use]
    pub fn classify(err: &GeocoderError) -> Self {
        match err {
            e if e.is_not_found() => GeocodingFailureKind::NotFound,
            GeocoderError::Deserialize { .. } | GeocoderError::Malformed { .. } => {
                GeocodingFailureKind::Malformed
            }
            _ => GeocodingFailureKind::Upstream,
        }
    }
}

impl std::fmt::Display for GeocodingFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeocodingFailureKind::NotFound => write!(f, "not found"),
            GeocodingFailureKind::Malformed => write!(f, "malformed response"),
            GeocodingFailureKind::Upstream => write!(f, "upstream error"),
        }
    }
}

/// Terminal failures of a delivery quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Required address fields are blank. No lookup was attempted.
    #[error("address is missing required fields: {}", join_fields(.missing))]
    ValidationFailed { missing: Vec<RequiredField> },

    #[error("geocoding failed ({kind}) for \"{address}\": {source}")]
    GeocodingFailed {
        kind: GeocodingFailureKind,
        address: String,
        #[source]
        source: GeocoderError,
    },

    /// Coordinates failed the range check while measuring distance.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(#[from] CoordinateError),
}

impl QuoteError {
    /// `true` when resubmitting the same address later might succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            QuoteError::GeocodingFailed { source, .. } => source.is_transient(),
            QuoteError::ValidationFailed { .. } | QuoteError::InvalidCoordinates(_) => false,
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
