// ABOUTME: Core types and constants for the Fuxing Guardian health tracker
// ABOUTME: Foundation crate with error handling, daily health models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

#![deny(unsafe_code)]

//! # Guardian Core
//!
//! Foundation crate providing shared types and constants for Fuxing Guardian.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Default metric snapshot, hydration servings, fallbacks
//! - **models**: `HealthMetrics`, `BloodPressure`, `DailyHealthRecord`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (daily health record, vitals, blood pressure)
pub mod models;
