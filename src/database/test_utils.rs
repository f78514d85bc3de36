// ABOUTME: Test utilities for database operations and in-memory test database creation
// ABOUTME: Provides helper functions for creating isolated test database instances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use super::Database;
use crate::errors::AppResult;

/// In-memory database URL; every pool gets its own isolated instance
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Create a migrated in-memory test database
///
/// # Errors
///
/// Returns an error if database initialization fails
pub async fn create_test_db() -> AppResult<Database> {
    Database::new(MEMORY_DATABASE_URL).await
}
