// ABOUTME: SQLite connection management and schema migration for daily health history
// ABOUTME: Owns the sqlx pool shared by every health log operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! # Database Management
//!
//! One table, `health_logs`, keyed by calendar date. Every statement touches a
//! single row, so no transactions are used.

mod health_logs;

/// Test helpers for in-memory databases
pub mod test_utils;

use crate::errors::{AppError, AppResult};
use sqlx::{Pool, Sqlite, SqlitePool};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Database manager for the daily health history
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (creating if needed) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the parent directory cannot be created,
    /// the connection fails, or a migration statement fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let connection_options = if is_memory_url(database_url) {
            database_url.to_owned()
        } else {
            ensure_parent_dir(database_url).await?;
            if database_url.contains('?') {
                database_url.to_owned()
            } else {
                // Ensure SQLite creates the database file if it doesn't exist
                format!("{database_url}?mode=rwc")
            }
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to connect to {database_url}: {e}"))
            })?;

        let db = Self { pool };
        db.migrate().await?;

        info!(database.url = %database_url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a schema statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_health_logs().await
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Create the directory holding a file-backed `SQLite` database
async fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path_str = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path_str = path_str.split('?').next().unwrap_or(path_str);

    if let Some(parent) = Path::new(path_str).parent() {
        if !parent.as_os_str().is_empty() {
            debug!(directory = %parent.display(), "Ensuring database directory exists");
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}
