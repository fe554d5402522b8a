//! Address resolution flow.
//!
//! A single pass: validate, geocode, measure, price, emit. Any failure ends
//! the pass; nothing falls back to a default fee.

use entrega_core::{
    haversine_km, Address, DeliveryConfig, DeliveryOption, DeliveryQuote, PricingPolicy,
    StoreLocation,
};
use rust_decimal::Decimal;

use crate::error::{GeocodingFailureKind, QuoteError};
use crate::geocoder::Geocoder;

/// Quotes a delivery from `store` to `address`.
///
/// `country` is appended to the geocoding query. The geocoder is called at
/// most once, and not at all when validation fails.
///
/// # Errors
///
/// - [`QuoteError::ValidationFailed`] if street, number, city or state is blank.
/// - [`QuoteError::GeocodingFailed`] if the geocoder has no match or fails.
/// - [`QuoteError::InvalidCoordinates`] if either point is out of range.
pub async fn resolve_delivery<G>(
    geocoder: &G,
    address: &Address,
    store: &StoreLocation,
    policy: &PricingPolicy,
    country: &str,
) -> Result<DeliveryQuote, QuoteError>
where
    G: Geocoder + ?Sized,
{
    let missing = address.missing_required_fields();
    if !missing.is_empty() {
        tracing::warn!(?missing, "delivery address incomplete");
        return Err(QuoteError::ValidationFailed { missing });
    }

    let address_text = address.full_text(country);
    tracing::debug!(address = %address_text, "resolving delivery address");

    let destination = geocoder.resolve(&address_text).await.map_err(|source| {
        let kind = GeocodingFailureKind::classify(&source);
        tracing::warn!(address = %address_text, %kind, error = %source, "geocoding failed");
        QuoteError::GeocodingFailed {
            kind,
            address: address_text.clone(),
            source,
        }
    })?;

    let distance_km = haversine_km(&store.coordinates, &destination).map_err(|e| {
        tracing::warn!(error = %e, "distance calculation rejected coordinates");
        QuoteError::InvalidCoordinates(e)
    })?;

    let fee = policy.fee_for(distance_km);
    tracing::debug!(distance_km, fee = %fee, "delivery priced");

    Ok(DeliveryQuote {
        option: DeliveryOption::Delivery,
        distance_km,
        fee,
        origin: store.coordinates.clone(),
        destination,
    })
}

/// Quote for collecting the order at the store: free, zero distance, no lookup.
#[must_use]
pub fn pickup_quote(store: &StoreLocation) -> DeliveryQuote {
    DeliveryQuote {
        option: DeliveryOption::Pickup,
        distance_km: 0.0,
        fee: Decimal::ZERO,
        origin: store.coordinates.clone(),
        destination: store.coordinates.clone(),
    }
}

/// Dispatches on the customer's delivery option.
///
/// Pickup ignores `address` entirely.
///
/// # Errors
///
/// Same as [`resolve_delivery`] for [`DeliveryOption::Delivery`]; pickup
/// never fails.
pub async fn quote_for_option<G>(
    geocoder: &G,
    option: DeliveryOption,
    address: &Address,
    config: &DeliveryConfig,
) -> Result<DeliveryQuote, QuoteError>
where
    G: Geocoder + ?Sized,
{
    match option {
        DeliveryOption::Pickup => Ok(pickup_quote(&config.store)),
        DeliveryOption::Delivery => {
            resolve_delivery(
                geocoder,
                address,
                &config.store,
                &config.pricing,
                &config.country,
            )
            .await
        }
    }
}
