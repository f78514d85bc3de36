// ABOUTME: Health log table operations keyed by calendar date
// ABOUTME: Upsert, lookup, ordered listing, score history, edit, and delete of daily records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use super::Database;
use crate::constants::storage::{DATE_FORMAT, HEALTH_LOGS_TABLE};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{BloodPressure, DailyHealthRecord, HealthMetrics};
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::time::Instant;
use tracing::info;

const SELECT_COLUMNS: &str = r"
    SELECT date, actual_age, body_age, visceral_fat, muscle_mass, bmi,
           resting_hr, blood_pressure, readiness_score,
           social_mode_active, micro_workouts_done, water_intake_cc, risk_probability
    FROM health_logs
";

impl Database {
    /// Create the `health_logs` table, upgrading logs saved without risk projection
    pub(super) async fn migrate_health_logs(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_logs (
                date TEXT PRIMARY KEY,
                actual_age INTEGER NOT NULL,
                body_age INTEGER NOT NULL,
                visceral_fat REAL NOT NULL,
                muscle_mass REAL NOT NULL,
                bmi REAL NOT NULL,
                resting_hr INTEGER NOT NULL,
                blood_pressure TEXT NOT NULL,
                readiness_score INTEGER NOT NULL,
                social_mode_active BOOLEAN NOT NULL DEFAULT false,
                micro_workouts_done INTEGER NOT NULL DEFAULT 0,
                water_intake_cc INTEGER NOT NULL DEFAULT 0,
                risk_probability INTEGER
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create health_logs table: {e}")))?;

        // Logs written before risk projection existed lack the column
        let columns: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM pragma_table_info('health_logs')")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to inspect health_logs columns: {e}"))
                })?;

        if !columns.iter().any(|(name,)| name == "risk_probability") {
            sqlx::query("ALTER TABLE health_logs ADD COLUMN risk_probability INTEGER")
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::database(format!("Failed to add risk_probability column: {e}"))
                })?;
            info!("Added risk_probability column to existing health_logs table");
        }

        Ok(())
    }

    /// Insert the record, overwriting any existing record for the same date
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn upsert_health_record(&self, record: &DailyHealthRecord) -> AppResult<()> {
        let started = Instant::now();
        let result = sqlx::query(
            r"
            INSERT INTO health_logs (
                date, actual_age, body_age, visceral_fat, muscle_mass, bmi,
                resting_hr, blood_pressure, readiness_score,
                social_mode_active, micro_workouts_done, water_intake_cc, risk_probability
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            ON CONFLICT(date) DO UPDATE SET
                actual_age = ?2,
                body_age = ?3,
                visceral_fat = ?4,
                muscle_mass = ?5,
                bmi = ?6,
                resting_hr = ?7,
                blood_pressure = ?8,
                readiness_score = ?9,
                social_mode_active = ?10,
                micro_workouts_done = ?11,
                water_intake_cc = ?12,
                risk_probability = ?13
            ",
        )
        .bind(date_key(record.date))
        .bind(record.metrics.actual_age)
        .bind(record.metrics.body_age)
        .bind(record.metrics.visceral_fat)
        .bind(record.metrics.muscle_mass)
        .bind(record.metrics.bmi)
        .bind(record.metrics.resting_heart_rate)
        .bind(record.metrics.blood_pressure.to_string())
        .bind(record.readiness_score)
        .bind(record.social_mode_active)
        .bind(record.micro_workouts_done)
        .bind(record.water_intake_cc)
        .bind(record.risk_probability)
        .execute(&self.pool)
        .await;

        log_operation("upsert", result.is_ok(), started);
        result.map_err(|e| AppError::database(format!("Failed to save health record: {e}")))?;

        Ok(())
    }

    /// Get the record for a date
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or the row cannot be decoded
    pub async fn get_health_record(&self, date: NaiveDate) -> AppResult<Option<DailyHealthRecord>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE date = ?1"))
            .bind(date_key(date))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get health record: {e}")))?;

        row.as_ref().map(row_to_record).transpose()
    }

    /// All records, newest date first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a row cannot be decoded
    pub async fn list_health_records(&self) -> AppResult<Vec<DailyHealthRecord>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY date DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list health records: {e}")))?;

        rows.iter().map(row_to_record).collect()
    }

    /// Readiness scores saved strictly before `before`, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn recent_readiness_scores(
        &self,
        before: NaiveDate,
        limit: u32,
    ) -> AppResult<Vec<u8>> {
        let rows = sqlx::query(
            r"
            SELECT readiness_score
            FROM health_logs
            WHERE date < ?1
            ORDER BY date DESC
            LIMIT ?2
            ",
        )
        .bind(date_key(before))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to read score history: {e}")))?;

        rows.iter()
            .map(|row| {
                row.try_get::<u8, _>("readiness_score").map_err(|e| {
                    AppError::database(format!("Failed to decode readiness_score: {e}"))
                })
            })
            .collect()
    }

    /// Overwrite an existing record
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no record exists for the date, or an
    /// error if the database operation fails
    pub async fn update_health_record(&self, record: &DailyHealthRecord) -> AppResult<()> {
        let started = Instant::now();
        let result = sqlx::query(
            r"
            UPDATE health_logs SET
                actual_age = ?2,
                body_age = ?3,
                visceral_fat = ?4,
                muscle_mass = ?5,
                bmi = ?6,
                resting_hr = ?7,
                blood_pressure = ?8,
                readiness_score = ?9,
                social_mode_active = ?10,
                micro_workouts_done = ?11,
                water_intake_cc = ?12,
                risk_probability = ?13
            WHERE date = ?1
            ",
        )
        .bind(date_key(record.date))
        .bind(record.metrics.actual_age)
        .bind(record.metrics.body_age)
        .bind(record.metrics.visceral_fat)
        .bind(record.metrics.muscle_mass)
        .bind(record.metrics.bmi)
        .bind(record.metrics.resting_heart_rate)
        .bind(record.metrics.blood_pressure.to_string())
        .bind(record.readiness_score)
        .bind(record.social_mode_active)
        .bind(record.micro_workouts_done)
        .bind(record.water_intake_cc)
        .bind(record.risk_probability)
        .execute(&self.pool)
        .await;

        log_operation("update", result.is_ok(), started);
        let result =
            result.map_err(|e| AppError::database(format!("Failed to update health record: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Health record for {}",
                date_key(record.date)
            )));
        }

        Ok(())
    }

    /// Delete the record for a date, returning whether one existed
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_health_record(&self, date: NaiveDate) -> AppResult<bool> {
        let started = Instant::now();
        let result = sqlx::query("DELETE FROM health_logs WHERE date = ?1")
            .bind(date_key(date))
            .execute(&self.pool)
            .await;

        log_operation("delete", result.is_ok(), started);
        let result =
            result.map_err(|e| AppError::database(format!("Failed to delete health record: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn log_operation(operation: &str, success: bool, started: Instant) {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_database_operation(operation, HEALTH_LOGS_TABLE, success, duration_ms);
}

fn decode_err(column: &str, e: &sqlx::Error) -> AppError {
    AppError::database(format!("Failed to decode {column}: {e}"))
}

fn row_to_record(row: &SqliteRow) -> AppResult<DailyHealthRecord> {
    let date_str: String = row.try_get("date").map_err(|e| decode_err("date", &e))?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("Stored date '{date_str}' is not YYYY-MM-DD: {e}"))
    })?;
    let blood_pressure: String = row
        .try_get("blood_pressure")
        .map_err(|e| decode_err("blood_pressure", &e))?;

    let metrics = HealthMetrics {
        actual_age: row
            .try_get("actual_age")
            .map_err(|e| decode_err("actual_age", &e))?,
        body_age: row
            .try_get("body_age")
            .map_err(|e| decode_err("body_age", &e))?,
        visceral_fat: row
            .try_get("visceral_fat")
            .map_err(|e| decode_err("visceral_fat", &e))?,
        muscle_mass: row
            .try_get("muscle_mass")
            .map_err(|e| decode_err("muscle_mass", &e))?,
        bmi: row.try_get("bmi").map_err(|e| decode_err("bmi", &e))?,
        resting_heart_rate: row
            .try_get("resting_hr")
            .map_err(|e| decode_err("resting_hr", &e))?,
        blood_pressure: BloodPressure::parse_or_fallback(&blood_pressure),
    };

    Ok(DailyHealthRecord {
        date,
        metrics,
        readiness_score: row
            .try_get("readiness_score")
            .map_err(|e| decode_err("readiness_score", &e))?,
        social_mode_active: row
            .try_get("social_mode_active")
            .map_err(|e| decode_err("social_mode_active", &e))?,
        micro_workouts_done: row
            .try_get("micro_workouts_done")
            .map_err(|e| decode_err("micro_workouts_done", &e))?,
        water_intake_cc: row
            .try_get("water_intake_cc")
            .map_err(|e| decode_err("water_intake_cc", &e))?,
        risk_probability: row
            .try_get("risk_probability")
            .map_err(|e| decode_err("risk_probability", &e))?,
    })
}
