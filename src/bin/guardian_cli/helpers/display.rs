// ABOUTME: Output formatting helpers for guardian-cli
// ABOUTME: Renders assessments, dashboards, and saved records as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use fuxing_guardian::errors::AppResult;
use fuxing_guardian::intelligence::recommendation_engine::{
    ResetTask, SafeModeReason,
};
use fuxing_guardian::intelligence::{
    AlcoholImpact, ReadinessAssessment, ReadinessStatus, WorkoutGate,
};
use fuxing_guardian::models::DailyHealthRecord;
use fuxing_guardian::service::{DashboardSnapshot, StorageMode};
use serde::Serialize;

/// Output mode selected by `--json`
pub struct Output {
    json: bool,
}

impl Output {
    /// Create the output mode
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Whether JSON output was requested
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> AppResult<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Display a readiness assessment
pub fn display_assessment(assessment: &ReadinessAssessment) {
    println!("Readiness: {}/100", assessment.readiness_score);
    println!(
        "Status:    {}",
        match assessment.status {
            ReadinessStatus::Stable => "stable, body is adapting",
            ReadinessStatus::MetabolicOverload => "metabolic overload, liver under load",
        }
    );

    if assessment.red_flag {
        println!("RED FLAG:  cardiovascular load too high, no active training today");
    }

    if let Some(risk) = &assessment.risk {
        println!("Risk:      {}% ({})", risk.risk_probability, risk.model);
        if let Some(slope) = risk.trend_slope {
            println!("Trend:     {slope:+.1} points/day");
        }
        if risk.breaker_tripped {
            println!("BREAKER:   tripped, high-intensity training disabled");
        }
    }
}

/// Display the full dashboard
pub fn display_dashboard(
    snapshot: &DashboardSnapshot,
    alcohol: Option<&AlcoholImpact>,
    no_drinks: Option<&str>,
) {
    println!("\nFuxing Guardian - {}", snapshot.date);
    println!("{}", "=".repeat(50));

    if let StorageMode::Offline { reason } = &snapshot.storage {
        println!("Storage offline ({reason}); history unavailable\n");
    }

    display_assessment(&snapshot.assessment);
    println!("Body age:  {}", snapshot.age_gap);

    let m = &snapshot.metrics;
    println!(
        "Vitals:    visceral fat {:.1}, muscle {:.1}%, BMI {:.1}, HR {}, BP {}",
        m.visceral_fat, m.muscle_mass, m.bmi, m.resting_heart_rate, m.blood_pressure
    );

    let h = &snapshot.hydration;
    println!(
        "\nWater:     {}/{} cc ({:.0}%){}",
        h.intake_cc,
        h.goal_cc,
        h.progress * 100.0,
        if snapshot.social_mode {
            " social mode goal"
        } else {
            ""
        }
    );

    println!("\nTraining:");
    match &snapshot.workout_gate {
        WorkoutGate::SafeMode { reason, guidance } => {
            let why = match reason {
                SafeModeReason::RedFlag => "red flag",
                SafeModeReason::CircuitBreaker => "circuit breaker",
            };
            println!("   SAFE MODE ({why}): {guidance}");
        }
        WorkoutGate::WeekendReset { tasks } => {
            println!("   Weekend reset:");
            for task in tasks {
                match task {
                    ResetTask::IntermittentFast => {
                        println!("   - 14-hour fast, breakfast delayed to 10:00");
                    }
                    ResetTask::NatureWalk => println!("   - 30-minute forest walk"),
                }
            }
            if let Some(completion) = snapshot.reset_completion {
                println!("   > {}", completion.message());
            }
        }
        WorkoutGate::MicroWorkout { slot, exercises } => {
            println!(
                "   {}-minute micro workout ({} done today):",
                slot.minutes(),
                snapshot.micro_workouts
            );
            for exercise in exercises {
                println!("   - {} x {}", exercise.name, exercise.prescription);
            }
        }
    }

    println!("\nMeals:     {}", snapshot.meal_order.join(" -> "));

    if let Some(message) = no_drinks {
        println!("\n{message}");
    }

    if let Some(impact) = alcohol {
        println!(
            "\nAlcohol:   {} drinks, fat burning paused ~{:.1} h",
            impact.drinks, impact.fat_burn_pause_hours
        );
        for warning in &impact.warnings {
            println!("   ! {warning}");
        }
    }

    if snapshot.history_points > 0 {
        println!("\n(trend from {} saved days)", snapshot.history_points);
    }
}

/// Display one saved record
pub fn display_record(record: &DailyHealthRecord) {
    let m = &record.metrics;
    println!("{}", "-".repeat(50));
    println!("Date:        {}", record.date);
    println!("Readiness:   {}/100", record.readiness_score);
    if let Some(risk) = record.risk_probability {
        println!("Risk:        {risk}%");
    }
    println!("Age:         {} (body {})", m.actual_age, m.body_age);
    println!("Visceral:    {:.1}", m.visceral_fat);
    println!("Muscle:      {:.1}%", m.muscle_mass);
    println!("BMI:         {:.1}", m.bmi);
    println!("Heart rate:  {}", m.resting_heart_rate);
    println!("BP:          {}", m.blood_pressure);
    println!("Social:      {}", if record.social_mode_active { "yes" } else { "no" });
    println!("Workouts:    {}", record.micro_workouts_done);
    println!("Water:       {} cc", record.water_intake_cc);
}

/// Display saved records as a table, newest first
pub fn display_history(records: &[DailyHealthRecord]) {
    if records.is_empty() {
        println!("No saved days");
        return;
    }

    println!(
        "{:<12} {:>5} {:>5} {:>8} {:>4} {:>8} {:>6} {:>3} {:>6}",
        "date", "score", "risk", "visceral", "hr", "bp", "social", "wo", "water"
    );
    for r in records {
        println!(
            "{:<12} {:>5} {:>5} {:>8.1} {:>4} {:>8} {:>6} {:>3} {:>6}",
            r.date.to_string(),
            r.readiness_score,
            r.risk_probability
                .map_or_else(|| "-".to_owned(), |p| p.to_string()),
            r.metrics.visceral_fat,
            r.metrics.resting_heart_rate,
            r.metrics.blood_pressure.to_string(),
            if r.social_mode_active { "yes" } else { "no" },
            r.micro_workouts_done,
            r.water_intake_cc
        );
    }
}
