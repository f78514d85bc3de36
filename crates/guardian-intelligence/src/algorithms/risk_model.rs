// ABOUTME: Versioned risk projection models layered on the readiness score
// ABOUTME: Implements baseline, workload projection, and trend circuit breaker variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use crate::scoring_engine::{RiskAssessment, ScoringEngine, ScoringInputs};
use guardian_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Risk projection selection
///
/// - `Baseline`: readiness score and red flag only
/// - `WorkloadProjection`: score deficit amplified by heart rate and work hours
/// - `TrendCircuitBreaker`: heuristic bonuses over score, recent trend, and BP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskModel {
    /// No projection
    Baseline,

    /// Workload Projection
    ///
    /// Formula: `Risk = (100 - score) x (1 + max(0, (HR - 65) x 0.05)) x (1 + hours x 0.1)`
    WorkloadProjection {
        /// Hours of work planned for the day
        workload_hours: f64,
    },

    /// Trend Circuit Breaker
    ///
    /// Formula: `Risk = 40[score < 65] + 30 x w[slope < -2] + 50[SBP > 140]`, clamped to 100;
    /// trips above 60. The bonuses are an uncalibrated heuristic.
    TrendCircuitBreaker {
        /// Scales the declining-trend bonus (1.0 = normal load)
        load_weight: f64,
    },
}

impl Default for RiskModel {
    fn default() -> Self {
        Self::TrendCircuitBreaker { load_weight: 1.0 }
    }
}

impl RiskModel {
    /// Project risk for an already computed readiness score
    ///
    /// Returns `None` for the baseline model. `history` is newest first.
    #[must_use]
    pub fn evaluate(
        &self,
        engine: &ScoringEngine,
        inputs: &ScoringInputs,
        readiness_score: u8,
        history: &[u8],
    ) -> Option<RiskAssessment> {
        match self {
            Self::Baseline => None,
            Self::WorkloadProjection { workload_hours } => {
                let risk =
                    engine.predictive_risk(readiness_score, inputs.heart_rate, *workload_hours);
                Some(RiskAssessment {
                    model: self.name().to_owned(),
                    risk_probability: risk,
                    trend_slope: None,
                    breaker_tripped: f64::from(risk)
                        > engine.config().circuit_breaker.trip_threshold,
                    factors: Vec::new(),
                })
            }
            Self::TrendCircuitBreaker { load_weight } => {
                let state = engine.predictive_circuit_breaker(inputs, history, *load_weight);
                Some(RiskAssessment {
                    model: self.name().to_owned(),
                    risk_probability: state.risk_probability,
                    trend_slope: Some(state.trend_slope),
                    breaker_tripped: state.tripped,
                    factors: state.factors,
                })
            }
        }
    }

    /// Whether the model reads past scores from storage
    #[must_use]
    pub const fn requires_history(&self) -> bool {
        matches!(self, Self::TrendCircuitBreaker { .. })
    }

    /// Get model name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::WorkloadProjection { .. } => "workload_projection",
            Self::TrendCircuitBreaker { .. } => "trend_circuit_breaker",
        }
    }

    /// Get model description
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Baseline => "Baseline (readiness score and red flag only)".to_owned(),
            Self::WorkloadProjection { workload_hours } => {
                format!("Workload Projection ({workload_hours:.1} h of work)")
            }
            Self::TrendCircuitBreaker { load_weight } => {
                format!("Trend Circuit Breaker (load weight={load_weight:.2})")
            }
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Baseline => "Readiness = 100 - penalties + bonuses, clamped to 0-100",
            Self::WorkloadProjection { .. } => {
                "Risk = (100 - score) x (1 + max(0, (HR - 65) x 0.05)) x (1 + hours x 0.1)"
            }
            Self::TrendCircuitBreaker { .. } => {
                "Risk = 40[score<65] + 30w[slope<-2] + 50[SBP>140], trips above 60"
            }
        }
    }

    /// Copy of this model with the workload/load parameter replaced
    #[must_use]
    pub const fn with_parameter(self, value: f64) -> Self {
        match self {
            Self::Baseline => Self::Baseline,
            Self::WorkloadProjection { .. } => Self::WorkloadProjection {
                workload_hours: value,
            },
            Self::TrendCircuitBreaker { .. } => Self::TrendCircuitBreaker { load_weight: value },
        }
    }
}

impl FromStr for RiskModel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baseline" | "none" => Ok(Self::Baseline),
            "workload" | "workload_projection" => Ok(Self::WorkloadProjection {
                workload_hours: 8.0,
            }),
            "trend" | "trend_circuit_breaker" | "circuit_breaker" => {
                Ok(Self::TrendCircuitBreaker { load_weight: 1.0 })
            }
            other => Err(AppError::invalid_input(format!(
                "Unknown risk model: '{other}'. Valid options: baseline, workload, trend"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ScoringInputs {
        ScoringInputs {
            visceral_fat: 25.0,
            heart_rate: 63,
            systolic_bp: 119,
            body_age: 69,
            actual_age: 54,
            social_mode: false,
            micro_workouts: 0,
            water_intake_cc: 0,
            water_goal_cc: 2000,
        }
    }

    #[test]
    fn test_baseline_has_no_projection() {
        let engine = ScoringEngine::default();
        assert!(RiskModel::Baseline
            .evaluate(&engine, &inputs(), 62, &[])
            .is_none());
    }

    #[test]
    fn test_workload_projection_trips_on_high_risk() {
        let engine = ScoringEngine::default();
        let model = RiskModel::WorkloadProjection {
            workload_hours: 10.0,
        };
        // 38 x 1.0 x 2.0 = 76
        let risk = model.evaluate(&engine, &inputs(), 62, &[]).unwrap();
        assert_eq!(risk.risk_probability, 76);
        assert!(risk.breaker_tripped);
        assert!(risk.trend_slope.is_none());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("BASELINE".parse::<RiskModel>().unwrap(), RiskModel::Baseline);
        assert_eq!(
            "trend".parse::<RiskModel>().unwrap(),
            RiskModel::TrendCircuitBreaker { load_weight: 1.0 }
        );
        assert!("magic".parse::<RiskModel>().is_err());
    }

    #[test]
    fn test_with_parameter() {
        let model = RiskModel::default().with_parameter(1.5);
        assert_eq!(model, RiskModel::TrendCircuitBreaker { load_weight: 1.5 });
        assert!(model.requires_history());
        assert_eq!(RiskModel::Baseline.with_parameter(3.0), RiskModel::Baseline);
    }

    #[test]
    fn test_formula_names_each_model_inputs() {
        assert!(RiskModel::Baseline.formula().contains("penalties"));
        assert!(RiskModel::WorkloadProjection { workload_hours: 8.0 }
            .formula()
            .contains("hours"));
        assert!(RiskModel::default().formula().contains("slope"));
    }
}
