use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocoderError;

pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, GeocoderError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base_url`, forcing exactly one trailing slash so that
/// [`Url::join`] appends to the path instead of replacing its last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, GeocoderError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| GeocoderError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Sends a GET, maps non-2xx statuses to [`GeocoderError::UnexpectedStatus`]
/// and returns the raw body.
pub(crate) async fn get_text(client: &Client, url: &Url) -> Result<String, GeocoderError> {
    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GeocoderError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}
