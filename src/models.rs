// ABOUTME: Daily health models re-exported from guardian-core
// ABOUTME: Provides BloodPressure, HealthMetrics, and DailyHealthRecord to the application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

pub use guardian_core::models::*;
