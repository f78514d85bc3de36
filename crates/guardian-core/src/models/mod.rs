// ABOUTME: Core data models for daily health tracking
// ABOUTME: Re-exports HealthMetrics, BloodPressure, and DailyHealthRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! # Data Models
//!
//! - `BloodPressure`: systolic/diastolic pair, persisted as `"120/80"`
//! - `HealthMetrics`: body composition and vitals measured in the morning
//! - `DailyHealthRecord`: one persisted snapshot per calendar date

mod health;
mod record;

pub use health::{BloodPressure, HealthMetrics};
pub use record::DailyHealthRecord;
