// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, logging, and health record helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fuxing_guardian`

use anyhow::Result;
use chrono::NaiveDate;
use fuxing_guardian::database::{test_utils, Database};
use fuxing_guardian::models::{BloodPressure, DailyHealthRecord, HealthMetrics};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(test_utils::create_test_db().await?)
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

/// Record with the default metric snapshot and the given score
pub fn record_with_score(day: &str, readiness_score: u8) -> DailyHealthRecord {
    DailyHealthRecord {
        date: date(day),
        metrics: HealthMetrics::default(),
        readiness_score,
        social_mode_active: false,
        micro_workouts_done: 0,
        water_intake_cc: 0,
        risk_probability: None,
    }
}

/// Metrics with a custom blood pressure
pub fn metrics_with_bp(systolic: u32, diastolic: u32) -> HealthMetrics {
    HealthMetrics {
        blood_pressure: BloodPressure::new(systolic, diastolic),
        ..HealthMetrics::default()
    }
}
