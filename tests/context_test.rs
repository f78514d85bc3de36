// ABOUTME: Tests for the per-day tracking context
// ABOUTME: Covers metric validation, water servings, social mode goals, and record conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, metrics_with_bp};
use fuxing_guardian::context::{DailyContext, WaterServing};
use fuxing_guardian::errors::ErrorCode;
use fuxing_guardian::intelligence::ScoringEngine;
use fuxing_guardian::models::HealthMetrics;

#[test]
fn test_fresh_context_uses_default_snapshot() {
    let ctx = DailyContext::new(date("2025-03-03"));
    assert_eq!(ctx.metrics, HealthMetrics::default());
    assert!(!ctx.social_mode);
    assert_eq!(ctx.micro_workouts, 0);
    assert_eq!(ctx.water_intake_cc, 0);
    assert_eq!(ctx.readiness_score(&ScoringEngine::default()), 62);
}

#[test]
fn test_invalid_metrics_leave_context_unchanged() {
    let mut ctx = DailyContext::new(date("2025-03-03"));
    let bad = HealthMetrics {
        visceral_fat: f64::NAN,
        ..HealthMetrics::default()
    };

    let err = ctx.update_metrics(bad).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.details["field"], "visceral_fat");
    assert_eq!(ctx.metrics, HealthMetrics::default());

    ctx.update_metrics(metrics_with_bp(135, 85)).unwrap();
    assert_eq!(ctx.metrics.blood_pressure.systolic, 135);
}

#[test]
fn test_water_servings_accumulate() {
    let mut ctx = DailyContext::new(date("2025-03-03"));
    assert_eq!(ctx.drink(WaterServing::Glass), 250);
    assert_eq!(ctx.drink(WaterServing::Bottle), 750);
    assert_eq!("500".parse::<WaterServing>().unwrap(), WaterServing::Bottle);
    assert_eq!("Glass".parse::<WaterServing>().unwrap(), WaterServing::Glass);
    assert!("bucket".parse::<WaterServing>().is_err());
}

#[test]
fn test_water_counter_saturates() {
    let mut ctx = DailyContext::new(date("2025-03-03"));
    ctx.water_intake_cc = u32::MAX - 100;
    assert_eq!(ctx.drink(WaterServing::Bottle), u32::MAX);
}

#[test]
fn test_social_mode_switches_goal_and_applies_penalty() {
    let engine = ScoringEngine::default();
    let hydration = engine.config().hydration;
    let mut ctx = DailyContext::new(date("2025-03-03"));
    for _ in 0..4 {
        ctx.drink(WaterServing::Bottle);
    }

    assert_eq!(ctx.water_goal(&hydration), 2000);
    // 62.5 + 5 for meeting the regular goal
    assert_eq!(ctx.readiness_score(&engine), 67);

    ctx.start_social_event();
    assert_eq!(ctx.water_goal(&hydration), 3000);
    // 62.5 - 20, and 2000 cc no longer meets the goal
    assert_eq!(ctx.readiness_score(&engine), 42);

    ctx.end_social_event();
    assert_eq!(ctx.readiness_score(&engine), 67);
}

#[test]
fn test_micro_workouts_raise_score() {
    let engine = ScoringEngine::default();
    let mut ctx = DailyContext::new(date("2025-03-03"));
    assert_eq!(ctx.complete_micro_workout(), 1);
    assert_eq!(ctx.complete_micro_workout(), 2);
    assert_eq!(ctx.readiness_score(&engine), 68);
}

#[test]
fn test_record_conversion_keeps_daily_state() {
    let engine = ScoringEngine::default();
    let mut ctx = DailyContext::new(date("2025-03-03"));
    ctx.start_social_event();
    ctx.complete_micro_workout();
    ctx.drink(WaterServing::Glass);

    let record = ctx.to_record(&engine, Some(40));
    assert_eq!(record.date, date("2025-03-03"));
    assert!(record.social_mode_active);
    assert_eq!(record.micro_workouts_done, 1);
    assert_eq!(record.water_intake_cc, 250);
    assert_eq!(record.readiness_score, 45);
    assert_eq!(record.risk_probability, Some(40));

    assert_eq!(DailyContext::from_record(&record), ctx);
}
