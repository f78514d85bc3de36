// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses database URL, risk model selection, scoring overrides, and log level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Environment-based configuration

use crate::constants::storage;
use anyhow::{bail, Context, Result};
use guardian_intelligence::{RiskModel, ScoringConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Long-running personal install
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// `SQLite` URL for the health log
    pub database_url: String,
    /// Risk projection layered on the readiness score
    pub risk_model: RiskModel,
    /// Scoring thresholds and weights
    pub scoring: ScoringConfig,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: storage::DEFAULT_DATABASE_URL.to_owned(),
            risk_model: RiskModel::default(),
            scoring: ScoringConfig::default(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `DATABASE_URL` (default `sqlite:./data/fuxing_guardian.db`)
    /// - `GUARDIAN_RISK_MODEL`: `baseline`, `workload`, or `trend`
    /// - `GUARDIAN_WORKLOAD_HOURS`: hours of work for the workload model
    /// - `GUARDIAN_LOAD_WEIGHT`: declining-trend weight for the trend model
    /// - `GUARDIAN_SCORING_CONFIG`: path to a JSON `ScoringConfig` override
    /// - `RUST_LOG`, `ENVIRONMENT`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the resulting
    /// configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut risk_model: RiskModel = env_var_or("GUARDIAN_RISK_MODEL", "trend")
            .parse()
            .context("Invalid GUARDIAN_RISK_MODEL value")?;

        match risk_model {
            RiskModel::WorkloadProjection { .. } => {
                if let Ok(raw) = env::var("GUARDIAN_WORKLOAD_HOURS") {
                    let hours: f64 = raw
                        .parse()
                        .context("Invalid GUARDIAN_WORKLOAD_HOURS value")?;
                    risk_model = risk_model.with_parameter(hours);
                }
            }
            RiskModel::TrendCircuitBreaker { .. } => {
                if let Ok(raw) = env::var("GUARDIAN_LOAD_WEIGHT") {
                    let weight: f64 = raw.parse().context("Invalid GUARDIAN_LOAD_WEIGHT value")?;
                    risk_model = risk_model.with_parameter(weight);
                }
            }
            RiskModel::Baseline => {}
        }

        let scoring = match env::var("GUARDIAN_SCORING_CONFIG") {
            Ok(path) => load_scoring_config(&path)?,
            Err(_) => ScoringConfig::default(),
        };

        let config = Self {
            database_url: env_var_or("DATABASE_URL", storage::DEFAULT_DATABASE_URL),
            risk_model,
            scoring,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the scoring configuration is inconsistent or a
    /// risk model parameter is out of range
    pub fn validate(&self) -> Result<()> {
        self.scoring
            .validate()
            .context("Scoring configuration is invalid")?;

        match self.risk_model {
            RiskModel::WorkloadProjection { workload_hours }
                if !(0.0..=24.0).contains(&workload_hours) =>
            {
                bail!("Workload hours must be between 0 and 24, got {workload_hours}");
            }
            RiskModel::TrendCircuitBreaker { load_weight }
                if !load_weight.is_finite() || load_weight < 0.0 =>
            {
                bail!("Load weight must be a non-negative number, got {load_weight}");
            }
            _ => {}
        }

        if self.database_url.trim().is_empty() {
            warn!("DATABASE_URL is empty; storage will run offline");
        }

        Ok(())
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "database={} model={} environment={} log_level={}",
            self.database_url,
            self.risk_model.description(),
            self.environment,
            self.log_level
        )
    }
}

/// Read and validate a JSON scoring configuration file
fn load_scoring_config(path: &str) -> Result<ScoringConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scoring config from {path}"))?;
    let config: ScoringConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse scoring config {path}"))?;
    info!(path = %path, "Loaded scoring configuration override");
    Ok(config)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
