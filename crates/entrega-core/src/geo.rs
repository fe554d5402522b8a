//! Geographic coordinates and great-circle distance.
//!
//! Distances use the haversine formula on a spherical earth, which is close
//! enough for pricing short urban deliveries.

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Values are fixed at construction. `label` carries the normalised display
/// name returned by the geocoder, when there is one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl Coordinates {
    /// Builds a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] if either value is NaN, infinite, or out
    /// of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coords = Self {
            latitude,
            longitude,
            label: None,
        };
        coords.validate()?;
        Ok(coords)
    }

    /// For literals known to be in range.
    pub(crate) const fn from_static(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = if label.trim().is_empty() {
            None
        } else {
            Some(label)
        };
        self
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Checks range and finiteness. Deserialized values skip [`Coordinates::new`],
    /// so the distance calculator re-checks through this.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] for NaN, infinite, or out-of-range values.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoordinateError::Latitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoordinateError::Longitude(self.longitude));
        }
        Ok(())
    }
}

/// Great-circle distance in kilometres between two points.
///
/// Symmetric in its arguments and exactly `0.0` for identical points.
///
/// # Errors
///
/// Returns [`CoordinateError`] if either point is invalid.
pub fn haversine_km(
    origin: &Coordinates,
    destination: &Coordinates,
) -> Result<f64, CoordinateError> {
    origin.validate()?;
    destination.validate()?;

    let lat1 = origin.latitude.to_radians();
    let lat2 = destination.latitude.to_radians();
    let half_dlat = (destination.latitude - origin.latitude).to_radians() / 2.0;
    let half_dlon = (destination.longitude - origin.longitude).to_radians() / 2.0;

    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    Ok(EARTH_RADIUS_KM * c)
}
