// ABOUTME: Readiness scoring, red-flag detection, and predictive risk calculations
// ABOUTME: Pure functions of the day's scalar inputs plus a short trailing score history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Scoring Engine
//!
//! The readiness score starts at 100 and subtracts weighted penalties for
//! visceral fat, resting heart rate, systolic pressure, and metabolic aging,
//! then adds back credit for micro workouts and meeting the water goal.
//!
//! Two risk projections build on it:
//! - **Workload projection**: the score deficit amplified by an elevated heart
//!   rate and the hours of work ahead.
//! - **Trend circuit breaker**: heuristic bonuses for a low score, a declining
//!   trend over the last few saved days, and elevated systolic pressure.
//!
//! Scoring never fails: inputs are already-validated numbers and every output
//! is clamped to 0-100.

use crate::algorithms::RiskModel;
use crate::config::ScoringConfig;
use crate::statistical_analysis::StatisticalAnalyzer;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Scalar inputs for one readiness computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringInputs {
    /// Visceral fat level
    pub visceral_fat: f64,
    /// Resting heart rate (bpm)
    pub heart_rate: u32,
    /// Systolic blood pressure (mmHg)
    pub systolic_bp: u32,
    /// Scale-estimated metabolic age
    pub body_age: u32,
    /// Chronological age
    pub actual_age: u32,
    /// Social dinner/drinking event today
    pub social_mode: bool,
    /// Micro workouts completed today
    pub micro_workouts: u32,
    /// Water consumed today (cc)
    pub water_intake_cc: u32,
    /// Water goal for today (cc)
    pub water_goal_cc: u32,
}

impl ScoringInputs {
    /// Whether today's water goal has been reached
    #[must_use]
    pub const fn water_goal_met(&self) -> bool {
        self.water_intake_cc >= self.water_goal_cc
    }
}

/// Coarse readiness classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// Score at or above the stable threshold
    Stable,
    /// Liver/metabolic load too high
    MetabolicOverload,
}

/// Contribution to the circuit breaker's risk probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// Readiness below the low-score threshold
    LowReadiness,
    /// Recent scores falling faster than the slope threshold
    DecliningTrend,
    /// Systolic pressure above the breaker threshold
    ElevatedSystolic,
}

/// Output of the trend circuit breaker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitBreakerState {
    /// Readiness score recomputed from the inputs
    pub readiness_score: u8,
    /// Slope over the trailing history window (points/day)
    pub trend_slope: f64,
    /// Number of historical scores used for the slope
    pub history_points: usize,
    /// Heuristic risk probability (0-100)
    pub risk_probability: u8,
    /// Whether high-intensity training is cut off
    pub tripped: bool,
    /// Which bonuses contributed
    pub factors: Vec<RiskFactor>,
}

/// Risk projection attached to an assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risk model name
    pub model: String,
    /// Projected risk (0-100)
    pub risk_probability: u8,
    /// Trend slope, for history-based models
    pub trend_slope: Option<f64>,
    /// Whether projected risk exceeds the trip threshold
    pub breaker_tripped: bool,
    /// Contributing factors, for history-based models
    pub factors: Vec<RiskFactor>,
}

/// Complete readiness assessment for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessAssessment {
    /// Readiness score (0-100)
    pub readiness_score: u8,
    /// Acute cardiovascular red flag
    pub red_flag: bool,
    /// Stable vs overloaded
    pub status: ReadinessStatus,
    /// Risk projection, absent for the baseline model
    pub risk: Option<RiskAssessment>,
}

impl ReadinessAssessment {
    /// High-intensity work is allowed only without a red flag or tripped breaker
    #[must_use]
    pub fn high_intensity_allowed(&self) -> bool {
        !self.red_flag && !self.risk.as_ref().is_some_and(|r| r.breaker_tripped)
    }
}

/// Readiness scoring engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Acute cardiovascular red flag
    #[must_use]
    pub const fn is_red_flag(&self, systolic_bp: u32, heart_rate: u32) -> bool {
        systolic_bp >= self.config.red_flag.systolic_threshold
            || heart_rate >= self.config.red_flag.heart_rate_threshold
    }

    /// Readiness score (0-100)
    #[must_use]
    pub fn readiness(&self, inputs: &ScoringInputs) -> u8 {
        let c = &self.config.readiness;
        let mut score = c.base_score;

        if inputs.visceral_fat > c.visceral_fat_baseline {
            score -= (inputs.visceral_fat - c.visceral_fat_baseline) * c.visceral_fat_weight;
        }

        let heart_rate = f64::from(inputs.heart_rate);
        if heart_rate > c.heart_rate_baseline {
            score -= (heart_rate - c.heart_rate_baseline) * c.heart_rate_weight;
        }

        let systolic = f64::from(inputs.systolic_bp);
        if systolic > c.systolic_baseline {
            score -= (systolic - c.systolic_baseline) * c.systolic_weight;
        }

        let age_gap = i64::from(inputs.body_age) - i64::from(inputs.actual_age);
        if age_gap > 0 {
            score -= age_gap as f64 * c.age_gap_weight;
        }

        if inputs.social_mode {
            score -= c.social_penalty;
        }

        score += f64::from(inputs.micro_workouts) * c.micro_workout_bonus;

        if inputs.water_goal_met() {
            score += c.hydration_bonus;
        }

        to_score(score)
    }

    /// Stable vs overloaded classification of a score
    #[must_use]
    pub const fn status(&self, score: u8) -> ReadinessStatus {
        if score >= self.config.readiness.stable_threshold {
            ReadinessStatus::Stable
        } else {
            ReadinessStatus::MetabolicOverload
        }
    }

    /// Workload-projected risk (0-100)
    ///
    /// Non-decreasing in both `heart_rate` and `workload_hours` for a fixed score.
    #[must_use]
    pub fn predictive_risk(&self, current_score: u8, heart_rate: u32, workload_hours: f64) -> u8 {
        let c = &self.config.predictive;
        let deficit = 100.0 - f64::from(current_score);
        let multiplier =
            1.0 + ((f64::from(heart_rate) - c.heart_rate_baseline) * c.heart_rate_multiplier).max(0.0);
        let load_factor = workload_hours.mul_add(c.workload_factor_per_hour, 1.0);

        to_score(deficit * multiplier * load_factor)
    }

    /// Trend circuit breaker
    ///
    /// `history` holds past readiness scores newest first, as read from storage;
    /// the most recent `trend_window` are put back in chronological order before
    /// the regression.
    #[must_use]
    pub fn predictive_circuit_breaker(
        &self,
        inputs: &ScoringInputs,
        history: &[u8],
        load_weight: f64,
    ) -> CircuitBreakerState {
        let c = &self.config.circuit_breaker;
        let readiness_score = self.readiness(inputs);

        let window: Vec<f64> = history
            .iter()
            .take(c.trend_window)
            .rev()
            .map(|s| f64::from(*s))
            .collect();
        let trend_slope = StatisticalAnalyzer::trend_slope(&window);

        let mut probability = 0.0;
        let mut factors = Vec::new();

        if readiness_score < c.low_score_threshold {
            probability += c.low_score_bonus;
            factors.push(RiskFactor::LowReadiness);
        }
        if trend_slope < c.slope_threshold {
            probability += c.declining_trend_bonus * load_weight;
            factors.push(RiskFactor::DecliningTrend);
        }
        if inputs.systolic_bp > c.systolic_threshold {
            probability += c.hypertension_bonus;
            factors.push(RiskFactor::ElevatedSystolic);
        }

        let probability: f64 = probability.clamp(0.0, 100.0);
        let tripped = probability > c.trip_threshold;

        CircuitBreakerState {
            readiness_score,
            trend_slope,
            history_points: window.len(),
            risk_probability: to_score(probability),
            tripped,
            factors,
        }
    }

    /// Full assessment under the given risk model
    ///
    /// `history` is only consulted by history-based models (newest first).
    #[must_use]
    pub fn assess(
        &self,
        inputs: &ScoringInputs,
        history: &[u8],
        model: &RiskModel,
    ) -> ReadinessAssessment {
        let readiness_score = self.readiness(inputs);
        let red_flag = self.is_red_flag(inputs.systolic_bp, inputs.heart_rate);
        let risk = model.evaluate(self, inputs, readiness_score, history);

        debug!(
            readiness.score = readiness_score,
            readiness.red_flag = red_flag,
            risk.model = model.name(),
            risk.probability = risk.as_ref().map(|r| r.risk_probability),
            "Readiness assessed"
        );

        if red_flag {
            warn!(
                systolic_bp = inputs.systolic_bp,
                heart_rate = inputs.heart_rate,
                "Red flag: cardiovascular load above hard threshold, active training blocked"
            );
        } else if risk.as_ref().is_some_and(|r| r.breaker_tripped) {
            warn!(
                risk.model = model.name(),
                "Predictive circuit breaker tripped, high-intensity training disabled"
            );
        }

        ReadinessAssessment {
            readiness_score,
            red_flag,
            status: self.status(readiness_score),
            risk,
        }
    }
}

/// Truncate toward zero and clamp into 0-100
fn to_score(value: f64) -> u8 {
    value.trunc().clamp(0.0, 100.0) as u8
}

/// Red flag under default thresholds: systolic >= 160 or heart rate >= 100
#[must_use]
pub fn is_red_flag(systolic_bp: u32, heart_rate: u32) -> bool {
    ScoringEngine::default().is_red_flag(systolic_bp, heart_rate)
}

/// Readiness score under the default penalty model
#[must_use]
pub fn readiness_score(
    visceral_fat: f64,
    heart_rate: u32,
    systolic_bp: u32,
    body_age: u32,
    actual_age: u32,
    social_mode: bool,
    micro_workouts: u32,
    water_intake_cc: u32,
    water_goal_cc: u32,
) -> u8 {
    ScoringEngine::default().readiness(&ScoringInputs {
        visceral_fat,
        heart_rate,
        systolic_bp,
        body_age,
        actual_age,
        social_mode,
        micro_workouts,
        water_intake_cc,
        water_goal_cc,
    })
}

/// Workload-projected risk under default parameters
#[must_use]
pub fn predictive_risk(current_score: u8, heart_rate: u32, workload_hours: f64) -> u8 {
    ScoringEngine::default().predictive_risk(current_score, heart_rate, workload_hours)
}
