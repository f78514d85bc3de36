// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default metric snapshot, hydration servings, and storage defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Constants module
//!
//! Scoring thresholds live in `guardian_intelligence::config::ScoringConfig` so
//! they can be tuned; the values here are fixed facts of the data model.

/// Initial metric snapshot used before the first measurement of the day
pub mod default_metrics {
    /// Chronological age (years)
    pub const ACTUAL_AGE: u32 = 54;
    /// Body age reported by the body-composition scale (years)
    pub const BODY_AGE: u32 = 69;
    /// Visceral fat level
    pub const VISCERAL_FAT: f64 = 25.0;
    /// Skeletal muscle percentage
    pub const MUSCLE_MASS: f64 = 26.7;
    /// Body mass index
    pub const BMI: f64 = 33.8;
    /// Resting heart rate (bpm)
    pub const RESTING_HEART_RATE: u32 = 63;
    /// Systolic blood pressure (mmHg)
    pub const SYSTOLIC: u32 = 119;
    /// Diastolic blood pressure (mmHg)
    pub const DIASTOLIC: u32 = 79;
}

/// Blood pressure storage format
pub mod blood_pressure {
    /// Systolic value used when a stored reading cannot be parsed
    pub const FALLBACK_SYSTOLIC: u32 = 120;
    /// Diastolic value used when a stored reading cannot be parsed
    pub const FALLBACK_DIASTOLIC: u32 = 80;
    /// Separator between systolic and diastolic in the persisted string
    pub const SEPARATOR: char = '/';
}

/// Hydration servings (cc)
pub mod hydration {
    /// One glass of water
    pub const GLASS_CC: u32 = 250;
    /// One bottle of water
    pub const BOTTLE_CC: u32 = 500;
}

/// Storage defaults
pub mod storage {
    /// Default `SQLite` location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/fuxing_guardian.db";
    /// Table holding one row per calendar date
    pub const HEALTH_LOGS_TABLE: &str = "health_logs";
    /// Date key format
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Service identity used in structured logs
pub mod service_names {
    /// CLI binary name
    pub const GUARDIAN_CLI: &str = "guardian-cli";
}
