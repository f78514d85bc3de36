// ABOUTME: Scoring configuration for readiness, red flags, hydration, and risk models
// ABOUTME: Defaults reproduce the dashboard's fixed thresholds; validate() guards overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Scoring Configuration
//!
//! Every constant the scoring pipeline uses lives here. The defaults are the
//! thresholds the dashboard has always used; callers may override them but
//! must pass [`ScoringConfig::validate`].

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};

/// Complete scoring configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Acute cardiovascular red-flag thresholds
    pub red_flag: RedFlagConfig,
    /// Readiness penalties and bonuses
    pub readiness: ReadinessConfig,
    /// Daily water goals
    pub hydration: HydrationConfig,
    /// Workload-projected risk parameters
    pub predictive: PredictiveRiskConfig,
    /// Trend circuit breaker parameters
    pub circuit_breaker: CircuitBreakerConfig,
}

/// Hard thresholds that block all active training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlagConfig {
    /// Systolic pressure at or above which training is blocked (mmHg)
    pub systolic_threshold: u32,
    /// Resting heart rate at or above which training is blocked (bpm)
    pub heart_rate_threshold: u32,
}

impl Default for RedFlagConfig {
    fn default() -> Self {
        Self {
            systolic_threshold: 160,
            heart_rate_threshold: 100,
        }
    }
}

/// Weighted penalty model for the readiness score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Starting score before penalties
    pub base_score: f64,
    /// Visceral fat level above which penalties apply
    pub visceral_fat_baseline: f64,
    /// Points lost per visceral fat level above baseline
    pub visceral_fat_weight: f64,
    /// Resting heart rate above which penalties apply (bpm)
    pub heart_rate_baseline: f64,
    /// Points lost per bpm above baseline
    pub heart_rate_weight: f64,
    /// Systolic pressure above which penalties apply (mmHg)
    pub systolic_baseline: f64,
    /// Points lost per mmHg above baseline
    pub systolic_weight: f64,
    /// Points lost per year of body age above actual age
    pub age_gap_weight: f64,
    /// Flat penalty on social-event days
    pub social_penalty: f64,
    /// Points gained per completed micro workout
    pub micro_workout_bonus: f64,
    /// Points gained when the water goal is met
    pub hydration_bonus: f64,
    /// Minimum score reported as stable
    pub stable_threshold: u8,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            base_score: 100.0,
            visceral_fat_baseline: 10.0,
            visceral_fat_weight: 1.5,
            heart_rate_baseline: 65.0,
            heart_rate_weight: 2.0,
            systolic_baseline: 130.0,
            systolic_weight: 1.0,
            age_gap_weight: 1.0,
            social_penalty: 20.0,
            micro_workout_bonus: 3.0,
            hydration_bonus: 5.0,
            stable_threshold: 70,
        }
    }
}

/// Daily water goals (cc)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Regular day goal
    pub daily_goal_cc: u32,
    /// Goal on social-event days
    pub social_goal_cc: u32,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            daily_goal_cc: 2000,
            social_goal_cc: 3000,
        }
    }
}

impl HydrationConfig {
    /// Goal for the day depending on whether a social event is scheduled
    #[must_use]
    pub const fn goal_for(&self, social_mode: bool) -> u32 {
        if social_mode {
            self.social_goal_cc
        } else {
            self.daily_goal_cc
        }
    }
}

/// Workload-projected risk parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictiveRiskConfig {
    /// Heart rate above which the deficit is amplified (bpm)
    pub heart_rate_baseline: f64,
    /// Multiplier growth per bpm above baseline
    pub heart_rate_multiplier: f64,
    /// Load factor growth per hour of work
    pub workload_factor_per_hour: f64,
}

impl Default for PredictiveRiskConfig {
    fn default() -> Self {
        Self {
            heart_rate_baseline: 65.0,
            heart_rate_multiplier: 0.05,
            workload_factor_per_hour: 0.1,
        }
    }
}

/// Heuristic bonuses for the trend circuit breaker
///
/// These bonuses have no documented calibration source; treat the resulting
/// probability as a placeholder heuristic, not a validated model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitBreakerConfig {
    /// Maximum number of past scores fed into the trend regression
    pub trend_window: usize,
    /// Score below which the low-readiness bonus applies
    pub low_score_threshold: u8,
    /// Risk added for a low readiness score
    pub low_score_bonus: f64,
    /// Slope below which the trend counts as declining (points/day)
    pub slope_threshold: f64,
    /// Risk added for a declining trend, scaled by load weight
    pub declining_trend_bonus: f64,
    /// Systolic pressure above which the hypertension bonus applies (mmHg)
    pub systolic_threshold: u32,
    /// Risk added for elevated systolic pressure
    pub hypertension_bonus: f64,
    /// Probability above which the breaker trips
    pub trip_threshold: f64,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            trend_window: 3,
            low_score_threshold: 65,
            low_score_bonus: 40.0,
            slope_threshold: -2.0,
            declining_trend_bonus: 30.0,
            systolic_threshold: 140,
            hypertension_bonus: 50.0,
            trip_threshold: 60.0,
        }
    }
}

impl ScoringConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any weight is negative or non-finite, if a
    /// threshold falls outside 0-100, or if the water goals are inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.readiness;
        let weights = [
            r.visceral_fat_weight,
            r.heart_rate_weight,
            r.systolic_weight,
            r.age_gap_weight,
            r.social_penalty,
            r.micro_workout_bonus,
            r.hydration_bonus,
            self.predictive.heart_rate_multiplier,
            self.predictive.workload_factor_per_hour,
            self.circuit_breaker.low_score_bonus,
            self.circuit_breaker.declining_trend_bonus,
            self.circuit_breaker.hypertension_bonus,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidRange(
                "penalties, bonuses and multipliers must be finite and non-negative",
            ));
        }

        if !(0.0..=100.0).contains(&r.base_score) {
            return Err(ConfigError::InvalidRange("base_score must be within 0-100"));
        }

        if r.stable_threshold > 100 || self.circuit_breaker.low_score_threshold > 100 {
            return Err(ConfigError::InvalidRange(
                "score thresholds must be within 0-100",
            ));
        }

        if !(0.0..=100.0).contains(&self.circuit_breaker.trip_threshold) {
            return Err(ConfigError::InvalidRange(
                "trip_threshold must be within 0-100",
            ));
        }

        if self.circuit_breaker.trend_window < 2 {
            return Err(ConfigError::InvalidRange(
                "trend_window needs at least 2 points for a slope",
            ));
        }

        if self.hydration.daily_goal_cc == 0
            || self.hydration.social_goal_cc < self.hydration.daily_goal_cc
        {
            return Err(ConfigError::InconsistentThresholds(
                "social water goal must be >= daily goal, and both non-zero",
            ));
        }

        if self.circuit_breaker.systolic_threshold >= self.red_flag.systolic_threshold {
            return Err(ConfigError::InconsistentThresholds(
                "breaker systolic threshold must sit below the red-flag threshold",
            ));
        }

        Ok(())
    }
}
