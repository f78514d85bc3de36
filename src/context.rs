// ABOUTME: Request-scoped state for one calendar day of tracking
// ABOUTME: Holds vitals, social mode, workouts, and water; derives scoring inputs and records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Daily context
//!
//! Everything the dashboard mutates during a day lives in a [`DailyContext`]
//! that callers own and pass explicitly. Nothing is global.

use crate::constants::hydration;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyHealthRecord, HealthMetrics};
use chrono::{Local, NaiveDate};
use guardian_intelligence::config::{HydrationConfig, ScoringConfig};
use guardian_intelligence::{ResetCompletion, ScoringEngine, ScoringInputs};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// A logged amount of water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterServing {
    /// 250 cc glass
    Glass,
    /// 500 cc bottle
    Bottle,
}

impl WaterServing {
    /// Volume in cc
    #[must_use]
    pub const fn cc(self) -> u32 {
        match self {
            Self::Glass => hydration::GLASS_CC,
            Self::Bottle => hydration::BOTTLE_CC,
        }
    }
}

impl FromStr for WaterServing {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "glass" | "250" => Ok(Self::Glass),
            "bottle" | "500" => Ok(Self::Bottle),
            other => Err(AppError::invalid_input(format!(
                "Unknown water serving '{other}'. Valid options: glass (250), bottle (500)"
            ))),
        }
    }
}

/// One day's tracked state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyContext {
    /// Calendar date being tracked
    pub date: NaiveDate,
    /// Morning measurements
    pub metrics: HealthMetrics,
    /// Social dinner/drinking event scheduled
    pub social_mode: bool,
    /// Micro workouts completed so far
    pub micro_workouts: u32,
    /// Water consumed so far (cc)
    pub water_intake_cc: u32,
    /// Weekend reset: 14-hour fast done (not persisted)
    #[serde(default)]
    pub fasted: bool,
    /// Weekend reset: forest walk done (not persisted)
    #[serde(default)]
    pub nature_walk: bool,
}

impl DailyContext {
    /// Fresh day with the default metric snapshot
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            metrics: HealthMetrics::default(),
            social_mode: false,
            micro_workouts: 0,
            water_intake_cc: 0,
            fasted: false,
            nature_walk: false,
        }
    }

    /// Fresh context for the local calendar date
    #[must_use]
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Replace the morning measurements
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if any measurement is implausible; the
    /// context is left unchanged in that case
    pub fn update_metrics(&mut self, metrics: HealthMetrics) -> AppResult<()> {
        metrics.validate()?;
        self.metrics = metrics;
        Ok(())
    }

    /// Record one completed micro workout, returning the new count
    pub fn complete_micro_workout(&mut self) -> u32 {
        self.micro_workouts = self.micro_workouts.saturating_add(1);
        debug!(micro_workouts = self.micro_workouts, "Micro workout completed");
        self.micro_workouts
    }

    /// Add a serving of water, returning the new total in cc
    pub fn drink(&mut self, serving: WaterServing) -> u32 {
        self.water_intake_cc = self.water_intake_cc.saturating_add(serving.cc());
        debug!(water_intake_cc = self.water_intake_cc, "Water logged");
        self.water_intake_cc
    }

    /// Activate social mode (raises the water goal and applies the social penalty)
    pub fn start_social_event(&mut self) {
        self.social_mode = true;
    }

    /// Deactivate social mode
    pub fn end_social_event(&mut self) {
        self.social_mode = false;
    }

    /// Tick off the weekend fast
    pub fn complete_fast(&mut self) {
        self.fasted = true;
    }

    /// Tick off the weekend forest walk
    pub fn complete_nature_walk(&mut self) {
        self.nature_walk = true;
    }

    /// Progress on the weekend reset protocol
    #[must_use]
    pub const fn reset_completion(&self) -> ResetCompletion {
        ResetCompletion::evaluate(self.fasted, self.nature_walk)
    }

    /// Today's water goal under the given hydration settings
    #[must_use]
    pub const fn water_goal(&self, config: &HydrationConfig) -> u32 {
        config.goal_for(self.social_mode)
    }

    /// Scalar inputs for the scoring engine
    #[must_use]
    pub const fn scoring_inputs(&self, config: &ScoringConfig) -> ScoringInputs {
        ScoringInputs {
            visceral_fat: self.metrics.visceral_fat,
            heart_rate: self.metrics.resting_heart_rate,
            systolic_bp: self.metrics.blood_pressure.systolic,
            body_age: self.metrics.body_age,
            actual_age: self.metrics.actual_age,
            social_mode: self.social_mode,
            micro_workouts: self.micro_workouts,
            water_intake_cc: self.water_intake_cc,
            water_goal_cc: self.water_goal(&config.hydration),
        }
    }

    /// Current readiness score
    #[must_use]
    pub fn readiness_score(&self, engine: &ScoringEngine) -> u8 {
        engine.readiness(&self.scoring_inputs(engine.config()))
    }

    /// Snapshot for persistence
    #[must_use]
    pub fn to_record(&self, engine: &ScoringEngine, risk_probability: Option<u8>) -> DailyHealthRecord {
        DailyHealthRecord {
            date: self.date,
            metrics: self.metrics,
            readiness_score: self.readiness_score(engine),
            social_mode_active: self.social_mode,
            micro_workouts_done: self.micro_workouts,
            water_intake_cc: self.water_intake_cc,
            risk_probability,
        }
    }

    /// Resume a previously saved day
    #[must_use]
    pub const fn from_record(record: &DailyHealthRecord) -> Self {
        Self {
            date: record.date,
            metrics: record.metrics,
            social_mode: record.social_mode_active,
            micro_workouts: record.micro_workouts_done,
            water_intake_cc: record.water_intake_cc,
            fasted: false,
            nature_walk: false,
        }
    }
}
