// ABOUTME: Dashboard assembly and persistence orchestration over optional storage
// ABOUTME: Degrades to offline mode when SQLite is unreachable so scoring keeps working
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Guardian service
//!
//! Scoring never depends on storage. When the database cannot be opened, or a
//! read fails later, the service logs a warning and switches to offline mode:
//! history reads come back empty and writes fail with `ResourceUnavailable`.

use crate::config::environment::ServerConfig;
use crate::context::DailyContext;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{DailyHealthRecord, HealthMetrics};
use chrono::NaiveDate;
use guardian_intelligence::config::ScoringConfig;
use guardian_intelligence::{
    AgeGapInsight, HydrationStatus, ReadinessAssessment, RecommendationEngine, ResetCompletion,
    RiskModel, ScoringEngine, ScoringInputs, TimeSlot, WorkoutGate,
};
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Whether persisted history is reachable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StorageMode {
    /// Database connected
    Online,
    /// Database unreachable; scoring only
    Offline {
        /// Why storage was abandoned
        reason: String,
    },
}

impl StorageMode {
    /// Whether history is available
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

/// Everything the dashboard shows for one day
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Day being shown
    pub date: NaiveDate,
    /// Morning measurements
    pub metrics: HealthMetrics,
    /// Social event active
    pub social_mode: bool,
    /// Micro workouts completed
    pub micro_workouts: u32,
    /// Score, red flag, status, and risk projection
    pub assessment: ReadinessAssessment,
    /// Water progress
    pub hydration: HydrationStatus,
    /// Allowed training
    pub workout_gate: WorkoutGate,
    /// Weekend reset progress, present only when the gate is the reset protocol
    pub reset_completion: Option<ResetCompletion>,
    /// Eating order that keeps blood sugar flat
    pub meal_order: &'static [&'static str],
    /// Metabolic age insight
    pub age_gap: AgeGapInsight,
    /// Saved scores the risk model consulted
    pub history_points: usize,
    /// Storage state when the snapshot was built
    pub storage: StorageMode,
}

/// Edited fields for an existing record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordEdit {
    /// Corrected measurements
    pub metrics: HealthMetrics,
    /// Corrected social flag
    pub social_mode_active: bool,
    /// Corrected workout count
    pub micro_workouts_done: u32,
    /// Corrected water intake (cc)
    pub water_intake_cc: u32,
}

impl RecordEdit {
    /// Start from a saved record's values
    #[must_use]
    pub const fn from_record(record: &DailyHealthRecord) -> Self {
        Self {
            metrics: record.metrics,
            social_mode_active: record.social_mode_active,
            micro_workouts_done: record.micro_workouts_done,
            water_intake_cc: record.water_intake_cc,
        }
    }

    fn scoring_inputs(&self, config: &ScoringConfig) -> ScoringInputs {
        ScoringInputs {
            visceral_fat: self.metrics.visceral_fat,
            heart_rate: self.metrics.resting_heart_rate,
            systolic_bp: self.metrics.blood_pressure.systolic,
            body_age: self.metrics.body_age,
            actual_age: self.metrics.actual_age,
            social_mode: self.social_mode_active,
            micro_workouts: self.micro_workouts_done,
            water_intake_cc: self.water_intake_cc,
            water_goal_cc: config.hydration.goal_for(self.social_mode_active),
        }
    }
}

/// Scoring plus optional persistence
pub struct GuardianService {
    database: Option<Database>,
    engine: ScoringEngine,
    degraded: OnceLock<String>,
}

impl GuardianService {
    /// Service over an already opened database
    #[must_use]
    pub fn new(database: Database, engine: ScoringEngine) -> Self {
        Self {
            database: Some(database),
            engine,
            degraded: OnceLock::new(),
        }
    }

    /// Service with no storage at all
    #[must_use]
    pub fn offline(reason: impl Into<String>, engine: ScoringEngine) -> Self {
        let reason = reason.into();
        AppLogger::log_storage_degraded(&reason);
        Self {
            database: None,
            engine,
            degraded: OnceLock::from(reason),
        }
    }

    /// Open the configured database, falling back to offline mode on failure
    pub async fn connect(config: &ServerConfig) -> Self {
        let engine = ScoringEngine::new(config.scoring);
        match Database::new(&config.database_url).await {
            Ok(database) => {
                info!(database.url = %config.database_url, "Storage online");
                Self::new(database, engine)
            }
            Err(e) => Self::offline(e.to_string(), engine),
        }
    }

    /// Scoring engine in use
    #[must_use]
    pub const fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Current storage state
    #[must_use]
    pub fn storage_mode(&self) -> StorageMode {
        match (self.degraded.get(), &self.database) {
            (Some(reason), _) => StorageMode::Offline {
                reason: reason.clone(),
            },
            (None, None) => StorageMode::Offline {
                reason: "no database configured".to_owned(),
            },
            (None, Some(_)) => StorageMode::Online,
        }
    }

    fn online_database(&self) -> Option<&Database> {
        if self.degraded.get().is_some() {
            return None;
        }
        self.database.as_ref()
    }

    fn require_database(&self) -> AppResult<&Database> {
        self.online_database().ok_or_else(|| {
            AppError::unavailable("Storage is offline; nothing was written")
        })
    }

    /// Switch to offline mode after a failed read
    ///
    /// Errors that leave the connection usable, such as a stored row that no
    /// longer parses, are logged and the service stays online.
    fn degrade(&self, error: &AppError) {
        if !error.code.is_storage_failure() {
            warn!(error.code = ?error.code, error = %error, "Skipping unreadable health data");
            return;
        }
        if self.degraded.set(error.to_string()).is_ok() {
            AppLogger::log_storage_degraded(&error.to_string());
        }
    }

    /// Past scores strictly before `date`, newest first; empty when offline
    async fn score_history(&self, date: NaiveDate, model: &RiskModel) -> Vec<u8> {
        if !model.requires_history() {
            return Vec::new();
        }
        let Some(database) = self.online_database() else {
            return Vec::new();
        };

        let window = self.engine.config().circuit_breaker.trend_window;
        let limit = u32::try_from(window).unwrap_or(u32::MAX);
        match database.recent_readiness_scores(date, limit).await {
            Ok(scores) => scores,
            Err(e) => {
                self.degrade(&e);
                Vec::new()
            }
        }
    }

    /// Assess the day under `model`, pulling history when the model needs it
    pub async fn assess(&self, ctx: &DailyContext, model: &RiskModel) -> ReadinessAssessment {
        let history = self.score_history(ctx.date, model).await;
        self.engine
            .assess(&ctx.scoring_inputs(self.engine.config()), &history, model)
    }

    /// Build the full dashboard for the day
    pub async fn dashboard(
        &self,
        ctx: &DailyContext,
        model: &RiskModel,
        slot: TimeSlot,
    ) -> DashboardSnapshot {
        let history = self.score_history(ctx.date, model).await;
        let inputs = ctx.scoring_inputs(self.engine.config());
        let assessment = self.engine.assess(&inputs, &history, model);
        let workout_gate = RecommendationEngine::workout_gate(&assessment, ctx.date, slot);
        let reset_completion = matches!(workout_gate, WorkoutGate::WeekendReset { .. })
            .then_some(ctx.reset_completion());

        DashboardSnapshot {
            date: ctx.date,
            metrics: ctx.metrics,
            social_mode: ctx.social_mode,
            micro_workouts: ctx.micro_workouts,
            hydration: RecommendationEngine::hydration(
                &self.engine.config().hydration,
                ctx.social_mode,
                ctx.water_intake_cc,
            ),
            workout_gate,
            reset_completion,
            meal_order: RecommendationEngine::meal_order(),
            age_gap: AgeGapInsight::from_gap(ctx.metrics.age_gap()),
            history_points: history.len(),
            storage: self.storage_mode(),
            assessment,
        }
    }

    /// Persist the day, overwriting any earlier save for the same date
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` when offline, or the storage error
    pub async fn save_today(
        &self,
        ctx: &DailyContext,
        model: &RiskModel,
    ) -> AppResult<DailyHealthRecord> {
        let database = self.require_database()?;
        let assessment = self.assess(ctx, model).await;
        let record = ctx.to_record(
            &self.engine,
            assessment.risk.as_ref().map(|r| r.risk_probability),
        );

        database.upsert_health_record(&record).await?;
        info!(
            date = %record.date,
            readiness.score = record.readiness_score,
            risk.probability = record.risk_probability,
            "Daily record saved"
        );
        Ok(record)
    }

    /// Saved record for a date; `None` when missing or offline
    pub async fn record(&self, date: NaiveDate) -> Option<DailyHealthRecord> {
        let database = self.online_database()?;
        match database.get_health_record(date).await {
            Ok(record) => record,
            Err(e) => {
                self.degrade(&e);
                None
            }
        }
    }

    /// Saved record for a date, telling a missing day apart from a failed read
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` when storage is offline, including when
    /// this lookup is the read that failed, or `ResourceNotFound` when nothing
    /// was saved for the date
    pub async fn require_record(&self, date: NaiveDate) -> AppResult<DailyHealthRecord> {
        if let Some(record) = self.record(date).await {
            return Ok(record);
        }
        if self.storage_mode().is_online() {
            Err(AppError::not_found(format!("Health record for {date}")))
        } else {
            Err(AppError::unavailable(format!(
                "Storage is offline; cannot read the record for {date}"
            )))
        }
    }

    /// All saved records, newest first; empty when offline
    pub async fn history(&self) -> Vec<DailyHealthRecord> {
        let Some(database) = self.online_database() else {
            return Vec::new();
        };
        match database.list_health_records().await {
            Ok(records) => records,
            Err(e) => {
                self.degrade(&e);
                Vec::new()
            }
        }
    }

    /// Resume a saved day, or start fresh when nothing was saved
    pub async fn load_context(&self, date: NaiveDate) -> DailyContext {
        self.record(date)
            .await
            .map_or_else(|| DailyContext::new(date), |r| DailyContext::from_record(&r))
    }

    /// Replace a saved record's values, recomputing its score and risk
    ///
    /// The water goal follows the edited social flag.
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` when offline, `ValueOutOfRange` for
    /// implausible metrics, `ResourceNotFound` when no record exists for the
    /// date, or the storage error
    pub async fn edit_record(
        &self,
        date: NaiveDate,
        edit: RecordEdit,
        model: &RiskModel,
    ) -> AppResult<DailyHealthRecord> {
        let database = self.require_database()?;
        edit.metrics.validate()?;

        let history = self.score_history(date, model).await;
        let inputs = edit.scoring_inputs(self.engine.config());
        let assessment = self.engine.assess(&inputs, &history, model);

        let record = DailyHealthRecord {
            date,
            metrics: edit.metrics,
            readiness_score: assessment.readiness_score,
            social_mode_active: edit.social_mode_active,
            micro_workouts_done: edit.micro_workouts_done,
            water_intake_cc: edit.water_intake_cc,
            risk_probability: assessment.risk.as_ref().map(|r| r.risk_probability),
        };

        database.update_health_record(&record).await?;
        info!(date = %date, readiness.score = record.readiness_score, "Record edited");
        Ok(record)
    }

    /// Delete a saved record, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` when offline, or the storage error
    pub async fn delete_record(&self, date: NaiveDate) -> AppResult<bool> {
        let database = self.require_database()?;
        let removed = database.delete_health_record(date).await?;
        if !removed {
            warn!(date = %date, "No record to delete");
        }
        Ok(removed)
    }
}
