use thiserror::Error;

/// Errors returned by the geocoding and CEP clients.
#[derive(Debug, Error)]
pub enum GeocoderError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body parsed but carried unusable values (e.g. a non-numeric latitude).
    #[error("malformed response for {context}: {reason}")]
    Malformed { context: String, reason: String },

    /// The geocoder answered successfully with zero matches.
    #[error("no geocoding match for \"{query}\"")]
    NoMatch { query: String },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("invalid CEP \"{0}\": expected 8 digits")]
    InvalidCep(String),

    #[error("CEP {cep} not found")]
    CepNotFound { cep: String },
}

impl GeocoderError {
    /// `true` when the upstream service answered and simply had nothing for
    /// the input. Resubmitting the same input will not help.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GeocoderError::NoMatch { .. } | GeocoderError::CepNotFound { .. }
        )
    }

    /// `true` for failures that may clear up on their own: timeouts,
    /// connection errors, 429 and 5xx responses.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            GeocoderError::Http(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            GeocoderError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
            GeocoderError::Deserialize { .. }
            | GeocoderError::Malformed { .. }
            | GeocoderError::NoMatch { .. }
            | GeocoderError::InvalidBaseUrl { .. }
            | GeocoderError::InvalidCep(_)
            | GeocoderError::CepNotFound { .. } => false,
        }
    }
}
