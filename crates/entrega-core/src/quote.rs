use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::geo::Coordinates;

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    Pickup,
    Delivery,
}

impl std::fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryOption::Pickup => write!(f, "pickup"),
            DeliveryOption::Delivery => write!(f, "delivery"),
        }
    }
}

/// The store every delivery departs from. Configured once per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLocation {
    pub address: Address,
    pub coordinates: Coordinates,
}

/// Result of pricing one delivery request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryQuote {
    pub option: DeliveryOption,
    pub distance_km: f64,
    pub fee: Decimal,
    pub origin: Coordinates,
    pub destination: Coordinates,
}

impl DeliveryQuote {
    /// Fee formatted for Brazilian display, e.g. `R$ 7,27`.
    #[must_use]
    pub fn fee_display(&self) -> String {
        format_brl(self.fee)
    }
}

/// Formats an amount as `R$ 1.234,56`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac_part}")
}
