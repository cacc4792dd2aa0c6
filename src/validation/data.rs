//! Range checks for incoming records
//!
//! The projector accepts any number, so nothing here is required for
//! correctness. Non-finite coordinates are rejected because they would turn
//! the whole scene offset into NaN; anything else that is merely out of range
//! is passed through with a warning.

use crate::core::ObserverPosition;
use crate::processing::IssRecord;
use std::fmt;
use thiserror::Error;

/// Record rejected outright
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
}

/// Suspicious but usable value
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    LatitudeOutOfRange { value: f64 },
    LongitudeOutOfRange { value: f64 },
    NegativeAltitude { value: f64 },
    AltitudeAboveLimit { value: f64, limit: f64 },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::LatitudeOutOfRange { value } => {
                write!(f, "latitude {:.4} outside [-90, 90]", value)
            }
            ValidationWarning::LongitudeOutOfRange { value } => {
                write!(f, "longitude {:.4} outside [-180, 180]", value)
            }
            ValidationWarning::NegativeAltitude { value } => {
                write!(f, "negative altitude {:.2} km", value)
            }
            ValidationWarning::AltitudeAboveLimit { value, limit } => {
                write!(f, "altitude {:.1} km above {:.1} km limit", value, limit)
            }
        }
    }
}

/// Validator for target records and observer fixes
#[derive(Debug, Clone)]
pub struct DataValidator {
    /// Altitudes above this are flagged (km)
    max_altitude_km: f64,
}

impl Default for DataValidator {
    fn default() -> Self {
        Self {
            // Well above any low-Earth-orbit station
            max_altitude_km: 2000.0,
        }
    }
}

impl DataValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_altitude(max_altitude_km: f64) -> Self {
        Self { max_altitude_km }
    }

    /// Check a decoded ISS record
    pub fn validate_record(&self, record: &IssRecord) -> Result<Vec<ValidationWarning>, ValidationError> {
        require_finite("latitude", record.latitude)?;
        require_finite("longitude", record.longitude)?;
        require_finite("altitude", record.altitude)?;

        let mut warnings = coordinate_warnings(record.latitude, record.longitude);

        if record.altitude < 0.0 {
            warnings.push(ValidationWarning::NegativeAltitude {
                value: record.altitude,
            });
        } else if record.altitude > self.max_altitude_km {
            warnings.push(ValidationWarning::AltitudeAboveLimit {
                value: record.altitude,
                limit: self.max_altitude_km,
            });
        }

        Ok(warnings)
    }

    /// Check an observer fix
    pub fn validate_observer(&self, observer: &ObserverPosition) -> Result<Vec<ValidationWarning>, ValidationError> {
        require_finite("observer latitude", observer.latitude)?;
        require_finite("observer longitude", observer.longitude)?;

        Ok(coordinate_warnings(observer.latitude, observer.longitude))
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field })
    }
}

fn coordinate_warnings(latitude: f64, longitude: f64) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    if !(-90.0..=90.0).contains(&latitude) {
        warnings.push(ValidationWarning::LatitudeOutOfRange { value: latitude });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        warnings.push(ValidationWarning::LongitudeOutOfRange { value: longitude });
    }
    warnings
}
