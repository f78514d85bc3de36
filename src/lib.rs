// ABOUTME: Main library entry point for the Fuxing Guardian daily health tracker
// ABOUTME: Wires the scoring engine to per-day context, SQLite history, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

#![deny(unsafe_code)]

//! # Fuxing Guardian
//!
//! Daily readiness scoring and workout gating for one person recovering from
//! metabolic overload. Each morning's vitals produce a 0-100 readiness score,
//! a hard cardiovascular red flag, and an optional risk projection that can
//! cut off high-intensity training before the numbers get worse.
//!
//! ## Architecture
//!
//! - **`guardian_core`**: errors, vitals models, default constants
//! - **`guardian_intelligence`**: scoring, risk models, recommendations
//! - **context**: the day's mutable state, passed explicitly
//! - **database**: one-table `SQLite` history of saved days
//! - **service**: dashboard assembly with offline degradation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fuxing_guardian::config::environment::ServerConfig;
//! use fuxing_guardian::context::DailyContext;
//! use fuxing_guardian::intelligence::TimeSlot;
//! use fuxing_guardian::service::GuardianService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let service = GuardianService::connect(&config).await;
//!     let ctx = DailyContext::today();
//!     let snapshot = service
//!         .dashboard(&ctx, &config.risk_model, TimeSlot::TenMinutes)
//!         .await;
//!     println!("Readiness: {}", snapshot.assessment.readiness_score);
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants (re-exported from `guardian-core`)
pub mod constants;

/// Request-scoped daily state
pub mod context;

/// `SQLite` storage for daily health records
pub mod database;

/// Error types (re-exported from `guardian-core`)
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Scoring and recommendation engine (re-exported from `guardian-intelligence`)
pub mod intelligence;

/// Domain models (re-exported from `guardian-core`)
pub mod models;

/// Dashboard and persistence orchestration
pub mod service;

