// ABOUTME: Daily dashboard and save commands for guardian-cli
// ABOUTME: Resumes the saved day, applies command-line actions, then shows or persists it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use chrono::Local;
use fuxing_guardian::context::{DailyContext, WaterServing};
use fuxing_guardian::errors::AppResult;
use fuxing_guardian::intelligence::{RecommendationEngine, RiskModel};
use fuxing_guardian::service::GuardianService;
use serde_json::json;
use tracing::{info, warn};

use super::apply_metric_overrides;
use crate::helpers::display::{display_dashboard, display_record, Output};
use crate::{DashboardArgs, DayArgs};

/// Load the day from storage and apply the requested actions
async fn build_context(service: &GuardianService, day: &DayArgs) -> AppResult<DailyContext> {
    let date = day.date.unwrap_or_else(|| Local::now().date_naive());
    let mut ctx = service.load_context(date).await;

    ctx.update_metrics(apply_metric_overrides(ctx.metrics, &day.metrics))?;

    if day.social {
        ctx.start_social_event();
    } else if day.end_social {
        ctx.end_social_event();
    }

    for _ in 0..day.workouts {
        ctx.complete_micro_workout();
    }
    for _ in 0..day.glasses {
        ctx.drink(WaterServing::Glass);
    }
    for _ in 0..day.bottles {
        ctx.drink(WaterServing::Bottle);
    }

    Ok(ctx)
}

/// Show the dashboard for the day
pub async fn dashboard(
    service: &GuardianService,
    model: &RiskModel,
    args: &DashboardArgs,
    output: &Output,
) -> AppResult<()> {
    let mut ctx = build_context(service, &args.day).await?;
    if args.fasted {
        ctx.complete_fast();
    }
    if args.walked {
        ctx.complete_nature_walk();
    }
    let snapshot = service.dashboard(&ctx, model, args.slot).await;

    let alcohol_impact = match args.drinks {
        Some(count) => {
            if !ctx.social_mode {
                warn!("Drinks planned without social mode; pass --social to raise the water goal");
            }
            Some(RecommendationEngine::alcohol_impact(args.alcohol, count)?)
        }
        None => None,
    };

    let no_drinks = if args.no_drinks {
        let confirmation = RecommendationEngine::no_drinks_confirmation(ctx.social_mode);
        if confirmation.is_none() {
            warn!("Social event active; end it with --end-social to log an alcohol-free day");
        }
        confirmation
    } else {
        None
    };

    if output.is_json() {
        output.json(&json!({
            "dashboard": snapshot,
            "alcohol_impact": alcohol_impact,
            "no_drinks_confirmation": no_drinks,
        }))
    } else {
        display_dashboard(&snapshot, alcohol_impact.as_ref(), no_drinks);
        Ok(())
    }
}

/// Save the day
pub async fn save(
    service: &GuardianService,
    model: &RiskModel,
    day: &DayArgs,
    output: &Output,
) -> AppResult<()> {
    let ctx = build_context(service, day).await?;
    let record = service.save_today(&ctx, model).await?;
    info!(date = %record.date, "Saved");

    if output.is_json() {
        output.json(&record)
    } else {
        println!("Saved {}", record.date);
        display_record(&record);
        Ok(())
    }
}
