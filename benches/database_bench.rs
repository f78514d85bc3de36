// ABOUTME: Criterion benchmarks for health log persistence using the SQLite backend
// ABOUTME: Measures daily upsert, trend history reads, and full history listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Criterion benchmarks for health log operations.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fuxing_guardian::database::{test_utils, Database};
use fuxing_guardian::models::{DailyHealthRecord, HealthMetrics};
use tokio::runtime::Runtime;

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn record_for(offset: u64) -> DailyHealthRecord {
    DailyHealthRecord {
        date: first_day().checked_add_days(Days::new(offset)).unwrap(),
        metrics: HealthMetrics::default(),
        readiness_score: (50 + offset % 40) as u8,
        social_mode_active: offset % 7 == 5,
        micro_workouts_done: (offset % 4) as u32,
        water_intake_cc: 1500 + (offset % 5) as u32 * 250,
        risk_probability: Some((offset % 100) as u8),
    }
}

async fn seeded_db(days: u64) -> Database {
    let db = test_utils::create_test_db().await.unwrap();
    for offset in 0..days {
        db.upsert_health_record(&record_for(offset)).await.unwrap();
    }
    db
}

/// Benchmark saving the same day repeatedly (overwrite path)
fn bench_upsert(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("health_logs_upsert");
    let db = rt.block_on(seeded_db(0));

    group.bench_function("same_day_overwrite", |b| {
        let record = record_for(0);
        b.iter(|| rt.block_on(async { db.upsert_health_record(black_box(&record)).await }));
    });

    group.throughput(Throughput::Elements(30));
    group.bench_function("month_of_days", |b| {
        b.iter(|| {
            rt.block_on(async {
                for offset in 0..30 {
                    db.upsert_health_record(&record_for(offset)).await.unwrap();
                }
            });
        });
    });

    group.finish();
}

/// Benchmark the trend circuit breaker's history read
fn bench_recent_scores(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("health_logs_recent_scores");

    for days in [30_u64, 365, 1825] {
        let db = rt.block_on(seeded_db(days));
        let target = first_day().checked_add_days(Days::new(days)).unwrap();
        group.bench_with_input(BenchmarkId::new("window_3", days), &days, |b, _| {
            b.iter(|| {
                rt.block_on(async { db.recent_readiness_scores(black_box(target), 3).await })
            });
        });
    }

    group.finish();
}

/// Benchmark listing the full history table
fn bench_list(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("health_logs_list");

    for days in [30_u64, 365] {
        let db = rt.block_on(seeded_db(days));
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(BenchmarkId::new("all", days), &days, |b, _| {
            b.iter(|| rt.block_on(async { db.list_health_records().await }));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_upsert, bench_recent_scores, bench_list);
criterion_main!(benches);
