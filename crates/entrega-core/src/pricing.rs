//! Distance-to-fee pricing.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Longest great-circle distance on the reference sphere (half the
/// circumference), rounded up. Larger inputs are priced as this distance.
const MAX_PRICED_DISTANCE_KM: f64 = 20_016.0;

/// Pricing rule: `base_fee + distance_km * per_km_rate`, optionally capped.
///
/// Amounts are in BRL. Fees are rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub base_fee: Decimal,
    pub per_km_rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<Decimal>,
}

impl PricingPolicy {
    #[must_use]
    pub fn new(base_fee: Decimal, per_km_rate: Decimal, max_fee: Option<Decimal>) -> Self {
        Self {
            base_fee,
            per_km_rate,
            max_fee,
        }
    }

    /// Fee for a delivery of `distance_km`.
    ///
    /// Zero, negative and NaN distances yield the base fee. Distances beyond
    /// the longest great-circle distance, `+∞` included, are priced as that
    /// distance. The result never exceeds `max_fee` and never decreases as
    /// distance grows.
    #[must_use]
    pub fn fee_for(&self, distance_km: f64) -> Decimal {
        let variable = if !distance_km.is_nan() && distance_km > 0.0 {
            // Clamped to a finite bound, so the conversion always succeeds.
            let km = Decimal::from_f64_retain(distance_km.min(MAX_PRICED_DISTANCE_KM))
                .unwrap_or(Decimal::ZERO);
            km.checked_mul(self.per_km_rate).unwrap_or(Decimal::MAX)
        } else {
            Decimal::ZERO
        };

        let mut fee = self.base_fee.checked_add(variable).unwrap_or(Decimal::MAX);
        if let Some(cap) = self.max_fee {
            fee = fee.min(cap);
        }

        fee.max(Decimal::ZERO)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Rejects negative amounts and a cap below the base fee.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_fee < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "pricing.base_fee must be non-negative, got {}",
                self.base_fee
            )));
        }
        if self.per_km_rate < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "pricing.per_km_rate must be non-negative, got {}",
                self.per_km_rate
            )));
        }
        if let Some(cap) = self.max_fee {
            if cap < self.base_fee {
                return Err(ConfigError::Validation(format!(
                    "pricing.max_fee ({cap}) must not be below pricing.base_fee ({})",
                    self.base_fee
                )));
            }
        }
        Ok(())
    }
}
