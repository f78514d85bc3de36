// ABOUTME: Readiness intelligence for the Fuxing Guardian health tracker
// ABOUTME: Scoring, risk models, trend regression, and daily workout recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

#![deny(unsafe_code)]

//! # Guardian Intelligence
//!
//! Pure computation over a day's vitals and a short history of saved scores.
//! Nothing here touches storage or the clock.
//!
//! ## Modules
//!
//! - **`scoring_engine`**: readiness score, red flag, workload and trend risk
//! - **algorithms**: `RiskModel` selection
//! - **`statistical_analysis`**: least-squares trend slope
//! - **`recommendation_engine`**: workout gate, hydration, alcohol impact
//! - **config**: `ScoringConfig` thresholds and weights

/// Risk model selection
pub mod algorithms;

/// Scoring thresholds and weights
pub mod config;

/// Workout gating and daily guidance
pub mod recommendation_engine;

/// Readiness and risk computation
pub mod scoring_engine;

/// Linear regression helpers
pub mod statistical_analysis;

pub use algorithms::RiskModel;
pub use config::{ConfigError, ScoringConfig};
pub use recommendation_engine::{
    AgeGapInsight, AlcoholImpact, AlcoholType, HydrationStatus, RecommendationEngine,
    ResetCompletion, TimeSlot, WorkoutGate,
};
pub use scoring_engine::{
    is_red_flag, predictive_risk, readiness_score, ReadinessAssessment, ReadinessStatus,
    RiskAssessment, ScoringEngine, ScoringInputs,
};
