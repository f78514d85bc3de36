// ABOUTME: Integration tests for health log persistence
// ABOUTME: Covers upsert overwrite, ordering, score history, edit, delete, and BP fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_database, date, metrics_with_bp, record_with_score};
use fuxing_guardian::database::Database;
use fuxing_guardian::errors::ErrorCode;
use fuxing_guardian::models::BloodPressure;

#[tokio::test]
async fn test_upsert_overwrites_same_date() {
    let db = create_test_database().await.unwrap();

    let mut record = record_with_score("2025-03-03", 62);
    db.upsert_health_record(&record).await.unwrap();

    record.readiness_score = 71;
    record.water_intake_cc = 2500;
    record.risk_probability = Some(40);
    db.upsert_health_record(&record).await.unwrap();

    let all = db.list_health_records().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], record);
}

#[tokio::test]
async fn test_get_missing_record_is_none() {
    let db = create_test_database().await.unwrap();
    assert!(db
        .get_health_record(date("2025-01-01"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_round_trip_preserves_every_field() {
    let db = create_test_database().await.unwrap();

    let mut record = record_with_score("2025-03-04", 55);
    record.metrics = metrics_with_bp(142, 91);
    record.metrics.visceral_fat = 23.5;
    record.social_mode_active = true;
    record.micro_workouts_done = 2;
    record.water_intake_cc = 3250;
    record.risk_probability = Some(90);
    db.upsert_health_record(&record).await.unwrap();

    let loaded = db
        .get_health_record(date("2025-03-04"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.metrics.blood_pressure, BloodPressure::new(142, 91));
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let db = create_test_database().await.unwrap();
    for (day, score) in [("2025-03-02", 60), ("2025-03-05", 70), ("2025-02-28", 50)] {
        db.upsert_health_record(&record_with_score(day, score))
            .await
            .unwrap();
    }

    let dates: Vec<String> = db
        .list_health_records()
        .await
        .unwrap()
        .iter()
        .map(|r| r.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2025-03-05", "2025-03-02", "2025-02-28"]);
}

#[tokio::test]
async fn test_recent_scores_exclude_target_date_and_respect_limit() {
    let db = create_test_database().await.unwrap();
    for (day, score) in [
        ("2025-03-01", 80),
        ("2025-03-02", 75),
        ("2025-03-03", 70),
        ("2025-03-04", 65),
        ("2025-03-05", 10),
    ] {
        db.upsert_health_record(&record_with_score(day, score))
            .await
            .unwrap();
    }

    let scores = db
        .recent_readiness_scores(date("2025-03-05"), 3)
        .await
        .unwrap();
    assert_eq!(scores, vec![65, 70, 75]);

    let none = db
        .recent_readiness_scores(date("2025-03-01"), 3)
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_update_existing_record() {
    let db = create_test_database().await.unwrap();
    let mut record = record_with_score("2025-03-03", 62);
    db.upsert_health_record(&record).await.unwrap();

    record.metrics = metrics_with_bp(128, 84);
    record.readiness_score = 60;
    db.update_health_record(&record).await.unwrap();

    let loaded = db
        .get_health_record(date("2025-03-03"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.readiness_score, 60);
    assert_eq!(loaded.metrics.blood_pressure.to_string(), "128/84");
}

#[tokio::test]
async fn test_update_missing_record_is_not_found() {
    let db = create_test_database().await.unwrap();
    let err = db
        .update_health_record(&record_with_score("2025-03-03", 62))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(db.list_health_records().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_reports_whether_row_existed() {
    let db = create_test_database().await.unwrap();
    db.upsert_health_record(&record_with_score("2025-03-03", 62))
        .await
        .unwrap();

    assert!(db.delete_health_record(date("2025-03-03")).await.unwrap());
    assert!(!db.delete_health_record(date("2025-03-03")).await.unwrap());
    assert!(db
        .get_health_record(date("2025-03-03"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_malformed_blood_pressure_falls_back() {
    let db = create_test_database().await.unwrap();
    db.upsert_health_record(&record_with_score("2025-03-03", 62))
        .await
        .unwrap();

    sqlx::query("UPDATE health_logs SET blood_pressure = 'high' WHERE date = '2025-03-03'")
        .execute(db.pool())
        .await
        .unwrap();

    let loaded = db
        .get_health_record(date("2025-03-03"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.metrics.blood_pressure, BloodPressure::new(120, 80));
}

#[tokio::test]
async fn test_file_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite:{}",
        dir.path().join("nested").join("guardian.db").display()
    );

    {
        let db = Database::new(&url).await.unwrap();
        db.upsert_health_record(&record_with_score("2025-03-03", 62))
            .await
            .unwrap();
        db.close().await;
    }

    let reopened = Database::new(&url).await.unwrap();
    let all = reopened.list_health_records().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].readiness_score, 62);
}

#[tokio::test]
async fn test_opens_log_saved_before_risk_projection() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("legacy.db").display());

    {
        let legacy = sqlx::SqlitePool::connect(&format!("{url}?mode=rwc"))
            .await
            .unwrap();
        sqlx::query(
            r"
            CREATE TABLE health_logs (
                date TEXT PRIMARY KEY,
                actual_age INTEGER, body_age INTEGER,
                visceral_fat REAL, muscle_mass REAL, bmi REAL,
                resting_hr INTEGER, blood_pressure TEXT,
                readiness_score INTEGER, social_mode_active BOOLEAN,
                micro_workouts_done INTEGER, water_intake_cc INTEGER
            )
            ",
        )
        .execute(&legacy)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO health_logs VALUES ('2025-03-02', 54, 69, 25.0, 26.7, 33.8, 63, '119/79', 62, 1, 2, 1500)",
        )
        .execute(&legacy)
        .await
        .unwrap();
        legacy.close().await;
    }

    let db = Database::new(&url).await.unwrap();
    let all = db.list_health_records().await.unwrap();
    assert_eq!(all.len(), 1);
    let old = &all[0];
    assert_eq!(old.date, date("2025-03-02"));
    assert_eq!(old.metrics.resting_heart_rate, 63);
    assert_eq!(old.metrics.blood_pressure, BloodPressure::new(119, 79));
    assert!(old.social_mode_active);
    assert_eq!(old.micro_workouts_done, 2);
    assert_eq!(old.risk_probability, None);

    let mut today = record_with_score("2025-03-03", 58);
    today.risk_probability = Some(70);
    db.upsert_health_record(&today).await.unwrap();
    assert_eq!(
        db.recent_readiness_scores(date("2025-03-04"), 3)
            .await
            .unwrap(),
        vec![58, 62]
    );

    // Reopening must not try to add the column twice
    db.close().await;
    let reopened = Database::new(&url).await.unwrap();
    let saved = reopened
        .get_health_record(date("2025-03-03"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.risk_probability, Some(70));
}
