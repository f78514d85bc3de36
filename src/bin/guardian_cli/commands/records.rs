// ABOUTME: Saved record commands for guardian-cli
// ABOUTME: Handles history, show, edit, and delete of daily health records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use chrono::NaiveDate;
use fuxing_guardian::errors::{AppError, AppResult};
use fuxing_guardian::intelligence::RiskModel;
use fuxing_guardian::service::{GuardianService, RecordEdit};
use serde_json::json;
use tracing::warn;

use super::apply_metric_overrides;
use crate::helpers::display::{display_history, display_record, Output};
use crate::MetricArgs;

/// List saved days, newest first
pub async fn history(
    service: &GuardianService,
    limit: Option<usize>,
    output: &Output,
) -> AppResult<()> {
    let mut records = service.history().await;
    if !service.storage_mode().is_online() {
        warn!("Storage offline; no history available");
    }
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    if output.is_json() {
        output.json(&records)
    } else {
        display_history(&records);
        Ok(())
    }
}

/// Show one saved day
pub async fn show(service: &GuardianService, date: NaiveDate, output: &Output) -> AppResult<()> {
    let record = service.require_record(date).await?;

    if output.is_json() {
        output.json(&record)
    } else {
        display_record(&record);
        Ok(())
    }
}

/// Correct a saved day
pub async fn edit(
    service: &GuardianService,
    model: &RiskModel,
    date: NaiveDate,
    metrics: &MetricArgs,
    social: Option<bool>,
    workouts: Option<u32>,
    water: Option<u32>,
    output: &Output,
) -> AppResult<()> {
    if !service.storage_mode().is_online() {
        return Err(AppError::unavailable("Storage is offline; cannot edit records"));
    }

    let existing = service.require_record(date).await?;

    let base = RecordEdit::from_record(&existing);
    let edit = RecordEdit {
        metrics: apply_metric_overrides(base.metrics, metrics),
        social_mode_active: social.unwrap_or(base.social_mode_active),
        micro_workouts_done: workouts.unwrap_or(base.micro_workouts_done),
        water_intake_cc: water.unwrap_or(base.water_intake_cc),
    };

    let record = service.edit_record(date, edit, model).await?;

    if output.is_json() {
        output.json(&record)
    } else {
        println!(
            "Updated {date}: readiness {} -> {}",
            existing.readiness_score, record.readiness_score
        );
        display_record(&record);
        Ok(())
    }
}

/// Delete a saved day
pub async fn delete(service: &GuardianService, date: NaiveDate, output: &Output) -> AppResult<()> {
    let removed = service.delete_record(date).await?;

    if output.is_json() {
        output.json(&json!({ "date": date, "deleted": removed }))
    } else {
        if removed {
            println!("Deleted {date}");
        } else {
            println!("No record for {date}");
        }
        Ok(())
    }
}
