// ABOUTME: Command modules for guardian-cli
// ABOUTME: Stateless scoring, daily dashboard/save, and saved record management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

pub mod day;
pub mod records;
pub mod score;

use crate::MetricArgs;
use fuxing_guardian::models::HealthMetrics;

/// Overlay any measurements given on the command line
pub fn apply_metric_overrides(base: HealthMetrics, overrides: &MetricArgs) -> HealthMetrics {
    HealthMetrics {
        actual_age: overrides.actual_age.unwrap_or(base.actual_age),
        body_age: overrides.body_age.unwrap_or(base.body_age),
        visceral_fat: overrides.visceral_fat.unwrap_or(base.visceral_fat),
        muscle_mass: overrides.muscle_mass.unwrap_or(base.muscle_mass),
        bmi: overrides.bmi.unwrap_or(base.bmi),
        resting_heart_rate: overrides.heart_rate.unwrap_or(base.resting_heart_rate),
        blood_pressure: overrides.blood_pressure.unwrap_or(base.blood_pressure),
    }
}
