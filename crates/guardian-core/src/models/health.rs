// ABOUTME: Vitals and body-composition models with blood pressure parsing
// ABOUTME: Lenient parsing falls back to 120/80 for malformed stored readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use crate::constants::{blood_pressure, default_metrics};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Arterial blood pressure reading in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic (upper) pressure
    pub systolic: u32,
    /// Diastolic (lower) pressure
    pub diastolic: u32,
}

impl BloodPressure {
    /// Fallback reading used when a stored string is malformed
    pub const FALLBACK: Self = Self {
        systolic: blood_pressure::FALLBACK_SYSTOLIC,
        diastolic: blood_pressure::FALLBACK_DIASTOLIC,
    };

    /// Create a reading
    #[must_use]
    pub const fn new(systolic: u32, diastolic: u32) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }

    /// Parse a `"systolic/diastolic"` string
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` unless the input is exactly two unsigned integers
    /// separated by `/`
    pub fn parse_strict(raw: &str) -> AppResult<Self> {
        let mut parts = raw.split(blood_pressure::SEPARATOR);
        let (Some(sys), Some(dia), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(AppError::invalid_format(format!(
                "Blood pressure '{raw}' must look like 120/80"
            )));
        };

        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|e| {
                AppError::invalid_format(format!("Blood pressure '{raw}' is not numeric: {e}"))
            })
        };

        Ok(Self::new(parse(sys)?, parse(dia)?))
    }

    /// Parse a stored reading, falling back to 120/80 when it is malformed
    #[must_use]
    pub fn parse_or_fallback(raw: &str) -> Self {
        Self::parse_strict(raw).unwrap_or_else(|e| {
            warn!(blood_pressure = %raw, error = %e, "Malformed stored blood pressure, using fallback");
            Self::FALLBACK
        })
    }
}

impl Default for BloodPressure {
    fn default() -> Self {
        Self::new(default_metrics::SYSTOLIC, default_metrics::DIASTOLIC)
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.systolic,
            blood_pressure::SEPARATOR,
            self.diastolic
        )
    }
}

impl FromStr for BloodPressure {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

/// Morning measurement snapshot from the body-composition scale and BP monitor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Chronological age (years)
    pub actual_age: u32,
    /// Scale-estimated metabolic age (years)
    pub body_age: u32,
    /// Visceral fat level
    pub visceral_fat: f64,
    /// Skeletal muscle percentage
    pub muscle_mass: f64,
    /// Body mass index
    pub bmi: f64,
    /// Resting heart rate (bpm)
    pub resting_heart_rate: u32,
    /// Blood pressure reading
    pub blood_pressure: BloodPressure,
}

impl Default for HealthMetrics {
    fn default() -> Self {
        Self {
            actual_age: default_metrics::ACTUAL_AGE,
            body_age: default_metrics::BODY_AGE,
            visceral_fat: default_metrics::VISCERAL_FAT,
            muscle_mass: default_metrics::MUSCLE_MASS,
            bmi: default_metrics::BMI,
            resting_heart_rate: default_metrics::RESTING_HEART_RATE,
            blood_pressure: BloodPressure::default(),
        }
    }
}

impl HealthMetrics {
    /// Body age minus actual age; positive means metabolically older
    #[must_use]
    pub fn age_gap(&self) -> i64 {
        i64::from(self.body_age) - i64::from(self.actual_age)
    }

    /// Reject values no scale or monitor would report
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        let check = |ok: bool, field: &str| {
            if ok {
                Ok(())
            } else {
                Err(AppError::value_out_of_range(format!(
                    "{field} is outside the plausible range"
                ))
                .with_details(json!({ "field": field })))
            }
        };

        check(self.actual_age <= 130, "actual_age")?;
        check(self.body_age <= 130, "body_age")?;
        check(
            self.visceral_fat.is_finite() && (0.0..=60.0).contains(&self.visceral_fat),
            "visceral_fat",
        )?;
        check(
            self.muscle_mass.is_finite() && (0.0..=100.0).contains(&self.muscle_mass),
            "muscle_mass",
        )?;
        check(self.bmi.is_finite() && (5.0..=100.0).contains(&self.bmi), "bmi")?;
        check(
            (20..=250).contains(&self.resting_heart_rate),
            "resting_heart_rate",
        )?;
        check(
            (50..=300).contains(&self.blood_pressure.systolic),
            "systolic",
        )?;
        check(
            (20..=200).contains(&self.blood_pressure.diastolic),
            "diastolic",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_strict_accepts_padded_values() {
        let bp = BloodPressure::parse_strict(" 135 / 88 ").unwrap();
        assert_eq!(bp, BloodPressure::new(135, 88));
        assert_eq!(bp.to_string(), "135/88");
    }

    #[test]
    fn test_parse_strict_rejects_extra_segments() {
        let err = BloodPressure::parse_strict("120/80/60").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_parse_or_fallback_on_garbage() {
        assert_eq!(BloodPressure::parse_or_fallback("n/a"), BloodPressure::FALLBACK);
        assert_eq!(BloodPressure::parse_or_fallback(""), BloodPressure::new(120, 80));
        assert_eq!(
            BloodPressure::parse_or_fallback("142/91"),
            BloodPressure::new(142, 91)
        );
    }

    #[test]
    fn test_default_snapshot_age_gap() {
        let metrics = HealthMetrics::default();
        assert_eq!(metrics.age_gap(), 15);
        assert!(metrics.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_implausible_heart_rate() {
        let metrics = HealthMetrics {
            resting_heart_rate: 400,
            ..HealthMetrics::default()
        };
        let err = metrics.validate().unwrap_err();
        assert!(err.message.contains("resting_heart_rate"));
        assert_eq!(err.details["field"], "resting_heart_rate");
    }
}
