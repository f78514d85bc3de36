// ABOUTME: Criterion benchmarks for readiness scoring and risk projection
// ABOUTME: Measures the per-day assessment under each risk model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Criterion benchmarks for the scoring engine.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuxing_guardian::intelligence::{
    RecommendationEngine, RiskModel, ScoringEngine, ScoringInputs, TimeSlot,
};

fn reference_inputs() -> ScoringInputs {
    ScoringInputs {
        visceral_fat: 25.0,
        heart_rate: 63,
        systolic_bp: 119,
        body_age: 69,
        actual_age: 54,
        social_mode: false,
        micro_workouts: 1,
        water_intake_cc: 1500,
        water_goal_cc: 2000,
    }
}

/// Benchmark the bare readiness score
fn bench_readiness(c: &mut Criterion) {
    let engine = ScoringEngine::default();
    let inputs = reference_inputs();

    c.bench_function("readiness_score", |b| {
        b.iter(|| engine.readiness(black_box(&inputs)));
    });
}

/// Benchmark a full assessment under every risk model
fn bench_assess(c: &mut Criterion) {
    let engine = ScoringEngine::default();
    let inputs = reference_inputs();
    let history = [60_u8, 70, 80];
    let mut group = c.benchmark_group("assess");

    let models = [
        RiskModel::Baseline,
        RiskModel::WorkloadProjection {
            workload_hours: 8.0,
        },
        RiskModel::TrendCircuitBreaker { load_weight: 1.0 },
    ];
    for model in models {
        group.bench_with_input(BenchmarkId::from_parameter(model.name()), &model, |b, m| {
            b.iter(|| engine.assess(black_box(&inputs), black_box(&history), m));
        });
    }

    group.finish();
}

/// Benchmark assessment plus workout gating, as the dashboard runs it
fn bench_dashboard_gate(c: &mut Criterion) {
    let engine = ScoringEngine::default();
    let inputs = reference_inputs();
    let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    let model = RiskModel::default();

    c.bench_function("assess_and_gate", |b| {
        b.iter(|| {
            let assessment = engine.assess(black_box(&inputs), &[62, 64, 66], &model);
            RecommendationEngine::workout_gate(&assessment, date, TimeSlot::TenMinutes)
        });
    });
}

criterion_group!(benches, bench_readiness, bench_assess, bench_dashboard_gate);
criterion_main!(benches);
