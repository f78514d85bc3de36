// ABOUTME: Configuration error types for scoring configuration validation
// ABOUTME: Defines error variants for invalid ranges and inconsistent thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Configuration error types for scoring configuration validation.

use guardian_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a weight below zero)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Thresholds are ordered inconsistently
    #[error("Inconsistent thresholds: {0}")]
    InconsistentThresholds(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
