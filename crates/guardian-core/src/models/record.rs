// ABOUTME: Persisted daily health snapshot, one row per calendar date
// ABOUTME: Combines morning metrics with the day's score, habits, and optional risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use super::HealthMetrics;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily snapshot keyed by date
///
/// At most one record exists per date; saving again for the same date
/// overwrites the earlier snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyHealthRecord {
    /// Calendar date (primary key)
    pub date: NaiveDate,
    /// Morning measurements
    #[serde(flatten)]
    pub metrics: HealthMetrics,
    /// Readiness score at save time (0-100)
    pub readiness_score: u8,
    /// Whether a social dinner/drinking event was scheduled
    pub social_mode_active: bool,
    /// Micro workouts completed
    pub micro_workouts_done: u32,
    /// Water intake (cc)
    pub water_intake_cc: u32,
    /// Predicted risk probability (0-100), when a risk model was active
    pub risk_probability: Option<u8>,
}
