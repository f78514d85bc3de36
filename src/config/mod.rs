// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Exposes environment-driven server configuration and the scoring configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Configuration module for Fuxing Guardian
//!
//! - **Environment**: database location, risk model, and log settings
//! - **Scoring**: thresholds and weights from `guardian-intelligence`

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
pub use guardian_intelligence::config::{ConfigError, ScoringConfig};
