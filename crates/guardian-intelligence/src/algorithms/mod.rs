// ABOUTME: Algorithm abstraction layer for selecting the readiness risk model
// ABOUTME: Provides enum-based dispatch across baseline, workload, and trend models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Algorithm Selection Module
//!
//! Each successive dashboard release layered a new risk projection on top of
//! the same readiness formula. Rather than duplicating the formula per release,
//! the projections are variants of a single enum dispatched by the engine.
//!
//! # Example
//!
//! ```rust
//! use guardian_intelligence::algorithms::RiskModel;
//!
//! let model: RiskModel = "trend".parse().unwrap();
//! assert_eq!(model.name(), "trend_circuit_breaker");
//! ```

pub mod risk_model;

pub use risk_model::RiskModel;
