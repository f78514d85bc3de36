// ABOUTME: Stateless readiness scoring command for guardian-cli
// ABOUTME: Scores flags directly without opening storage; history-based models see no history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

use clap::Args;
use fuxing_guardian::config::environment::ServerConfig;
use fuxing_guardian::errors::AppResult;
use fuxing_guardian::intelligence::{ScoringEngine, ScoringInputs};
use tracing::info;

use crate::helpers::display::{display_assessment, Output};

/// Vitals for a one-off score
#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Visceral fat level
    #[arg(long)]
    pub visceral_fat: f64,

    /// Resting heart rate (bpm)
    #[arg(long)]
    pub heart_rate: u32,

    /// Systolic blood pressure (mmHg)
    #[arg(long)]
    pub systolic: u32,

    /// Scale-estimated body age
    #[arg(long)]
    pub body_age: u32,

    /// Chronological age
    #[arg(long)]
    pub actual_age: u32,

    /// Social event today
    #[arg(long)]
    pub social: bool,

    /// Micro workouts completed
    #[arg(long, default_value = "0")]
    pub workouts: u32,

    /// Water consumed (cc)
    #[arg(long, default_value = "0")]
    pub water: u32,
}

/// Score the given vitals
pub fn run(config: &ServerConfig, args: &ScoreArgs, output: &Output) -> AppResult<()> {
    let engine = ScoringEngine::new(config.scoring);
    let inputs = ScoringInputs {
        visceral_fat: args.visceral_fat,
        heart_rate: args.heart_rate,
        systolic_bp: args.systolic,
        body_age: args.body_age,
        actual_age: args.actual_age,
        social_mode: args.social,
        micro_workouts: args.workouts,
        water_intake_cc: args.water,
        water_goal_cc: config.scoring.hydration.goal_for(args.social),
    };

    if config.risk_model.requires_history() {
        info!("Stateless score: the trend model sees no saved history");
    }

    let assessment = engine.assess(&inputs, &[], &config.risk_model);

    if output.is_json() {
        output.json(&assessment)
    } else {
        display_assessment(&assessment);
        println!("Model:     {}", config.risk_model.description());
        println!("Formula:   {}", config.risk_model.formula());
        Ok(())
    }
}
