//! CEP (Brazilian postal code) lookup against a ViaCEP-compatible API.
//!
//! Used only to pre-fill an [`Address`] before the customer adds the house
//! number; the delivery quote itself never depends on it.

use entrega_core::Address;
use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::GeocoderError;
use crate::http::{build_client, get_text, parse_base_url};
use crate::types::ViaCepResponse;

const DEFAULT_BASE_URL: &str = "https://viacep.com.br";

/// Address fields resolved from a CEP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CepAddress {
    pub cep: String,
    pub street: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl CepAddress {
    /// An [`Address`] with street, neighborhood, city and state filled in.
    ///
    /// `number` is left empty and `complement` unset: the customer has to
    /// supply them, and the ViaCEP complement describes the street range
    /// rather than the customer's unit.
    #[must_use]
    pub fn into_address_template(self) -> Address {
        Address {
            street: self.street,
            number: String::new(),
            complement: None,
            neighborhood: Some(self.neighborhood).filter(|n| !n.trim().is_empty()),
            city: self.city,
            state: self.state,
        }
    }
}

/// Strips punctuation and whitespace from a CEP and checks it has 8 digits.
///
/// # Errors
///
/// Returns [`GeocoderError::InvalidCep`] if the input does not contain
/// exactly 8 digits.
pub fn normalize_cep(raw: &str) -> Result<String, GeocoderError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let only_separators = raw
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == '.' || c.is_whitespace());

    if digits.len() == 8 && only_separators {
        Ok(digits)
    } else {
        Err(GeocoderError::InvalidCep(raw.to_owned()))
    }
}

/// Client for a ViaCEP-compatible CEP lookup API.
pub struct CepClient {
    client: Client,
    base_url: Url,
}

impl CepClient {
    /// Creates a client pointed at the public ViaCEP service.
    ///
    /// # Errors
    ///
    /// Returns [`GeocoderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocoderError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
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

    /// Looks up the address for a CEP such as `"07908-000"`.
    ///
    /// # Errors
    ///
    /// - [`GeocoderError::InvalidCep`] if `cep` is not 8 digits (no request is sent).
    /// - [`GeocoderError::CepNotFound`] if the service reports an unknown CEP.
    /// - [`GeocoderError::Http`] / [`GeocoderError::UnexpectedStatus`] on
    ///   network failure or a non-2xx status.
    /// - [`GeocoderError::Deserialize`] if the body is not the expected JSON.
    pub async fn lookup(&self, cep: &str) -> Result<CepAddress, GeocoderError> {
        let cep = normalize_cep(cep)?;
        let url = self.lookup_url(&cep)?;
        tracing::debug!(cep = %cep, "looking up CEP");

        let body = get_text(&self.client, &url).await?;
        let parsed: ViaCepResponse =
            serde_json::from_str(&body).map_err(|e| GeocoderError::Deserialize {
                context: format!("cep({cep})"),
                source: e,
            })?;

        if parsed.is_error() {
            return Err(GeocoderError::CepNotFound { cep });
        }

        Ok(CepAddress {
            cep: if parsed.cep.is_empty() { cep } else { parsed.cep },
            street: parsed.logradouro,
            complement: parsed.complemento,
            neighborhood: parsed.bairro,
            city: parsed.localidade,
            state: parsed.uf,
        })
    }

    fn lookup_url(&self, cep: &str) -> Result<Url, GeocoderError> {
        self.base_url
            .join(&format!("ws/{cep}/json/"))
            .map_err(|e| GeocoderError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}
