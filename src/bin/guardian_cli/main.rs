// ABOUTME: Guardian CLI - daily readiness scoring and health log management
// ABOUTME: Scores vitals, shows the dashboard, and saves, lists, edits, or deletes daily records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors
//!
//! Usage:
//! ```bash
//! # Stateless score from this morning's numbers
//! guardian-cli score --visceral-fat 25 --heart-rate 63 --systolic 119 --body-age 69 --actual-age 54
//!
//! # Dashboard for today with two glasses of water and a 10-minute slot
//! guardian-cli dashboard --glasses 2 --slot 10
//!
//! # Saturday after the fast and the forest walk
//! guardian-cli dashboard --date 2025-03-01 --fasted --walked
//!
//! # Save today under the workload model
//! guardian-cli --model workload --workload-hours 10 save --workouts 1
//!
//! # History, newest first
//! guardian-cli history --limit 7
//!
//! # Correct a saved day
//! guardian-cli edit 2025-03-03 --blood-pressure 128/84 --water 2500
//!
//! # Delete a saved day
//! guardian-cli delete 2025-03-03
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fuxing_guardian::config::environment::ServerConfig;
use fuxing_guardian::intelligence::{AlcoholType, RiskModel, TimeSlot};
use fuxing_guardian::logging::LoggingConfig;
use fuxing_guardian::models::BloodPressure;
use fuxing_guardian::service::GuardianService;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "guardian-cli",
    about = "Fuxing Guardian daily readiness tracker",
    long_about = "Scores morning vitals into a 0-100 readiness score, gates training on cardiovascular red flags and projected risk, and keeps a one-row-per-day health log."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Risk model: baseline, workload, or trend
    #[arg(long, global = true)]
    model: Option<RiskModel>,

    /// Hours of work ahead (workload model)
    #[arg(long, global = true)]
    workload_hours: Option<f64>,

    /// Declining-trend weight (trend model)
    #[arg(long, global = true)]
    load_weight: Option<f64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score vitals without touching storage
    Score(commands::score::ScoreArgs),

    /// Show the daily dashboard
    Dashboard(DashboardArgs),

    /// Save the day, overwriting any earlier save for the same date
    Save {
        #[command(flatten)]
        day: DayArgs,
    },

    /// List saved days, newest first
    History {
        /// Show at most this many days
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one saved day
    Show {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
    },

    /// Correct a saved day and recompute its score
    Edit {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,

        #[command(flatten)]
        metrics: MetricArgs,

        /// Social event flag
        #[arg(long)]
        social: Option<bool>,

        /// Micro workouts completed
        #[arg(long)]
        workouts: Option<u32>,

        /// Water consumed (cc)
        #[arg(long)]
        water: Option<u32>,
    },

    /// Delete a saved day
    Delete {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
    },
}

/// Optional measurement overrides
#[derive(Args, Debug, Clone, Default)]
pub struct MetricArgs {
    /// Chronological age
    #[arg(long)]
    pub actual_age: Option<u32>,

    /// Scale-estimated body age
    #[arg(long)]
    pub body_age: Option<u32>,

    /// Visceral fat level
    #[arg(long)]
    pub visceral_fat: Option<f64>,

    /// Skeletal muscle percentage
    #[arg(long)]
    pub muscle_mass: Option<f64>,

    /// Body mass index
    #[arg(long)]
    pub bmi: Option<f64>,

    /// Resting heart rate (bpm)
    #[arg(long)]
    pub heart_rate: Option<u32>,

    /// Blood pressure as systolic/diastolic
    #[arg(long)]
    pub blood_pressure: Option<BloodPressure>,
}

/// Dashboard options on top of the day's actions
#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub day: DayArgs,

    /// Free time for a micro workout: 3, 10, or 15 minutes
    #[arg(long, default_value = "3")]
    pub slot: TimeSlot,

    /// Drinks planned tonight (social mode)
    #[arg(long, conflicts_with = "no_drinks")]
    pub drinks: Option<u32>,

    /// Drink type: spirits, wine, or beer
    #[arg(long, default_value = "spirits")]
    pub alcohol: AlcoholType,

    /// Confirm an alcohol-free day
    #[arg(long)]
    pub no_drinks: bool,

    /// Weekend reset: the 14-hour fast is done
    #[arg(long)]
    pub fasted: bool,

    /// Weekend reset: the 30-minute forest walk is done
    #[arg(long)]
    pub walked: bool,
}

/// Day selection and actions applied on top of any saved state
#[derive(Args, Debug, Clone, Default)]
pub struct DayArgs {
    /// Date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub metrics: MetricArgs,

    /// Start a social event (raises the water goal)
    #[arg(long, conflicts_with = "end_social")]
    pub social: bool,

    /// End the social event
    #[arg(long)]
    pub end_social: bool,

    /// Micro workouts to add
    #[arg(long, default_value = "0")]
    pub workouts: u32,

    /// 250 cc glasses of water to add
    #[arg(long, default_value = "0")]
    pub glasses: u32,

    /// 500 cc bottles of water to add
    #[arg(long, default_value = "0")]
    pub bottles: u32,
}

fn resolve_model(cli: &Cli, config: &ServerConfig) -> RiskModel {
    let mut model = cli.model.unwrap_or(config.risk_model);
    match model {
        RiskModel::WorkloadProjection { .. } => {
            if let Some(hours) = cli.workload_hours {
                model = model.with_parameter(hours);
            }
        }
        RiskModel::TrendCircuitBreaker { .. } => {
            if let Some(weight) = cli.load_weight {
                model = model.with_parameter(weight);
            }
        }
        RiskModel::Baseline => {}
    }
    model
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::from_env()?;

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging.with_level(config.log_level.to_string())
    };
    logging.init()?;

    if let Some(url) = &cli.database_url {
        config.database_url.clone_from(url);
    }
    config.risk_model = resolve_model(&cli, &config);
    config.validate()?;
    debug!("Configuration: {}", config.summary());

    let output = helpers::display::Output::new(cli.json);
    let model = config.risk_model;

    match cli.command {
        Command::Score(args) => {
            commands::score::run(&config, &args, &output)?;
        }
        Command::Dashboard(args) => {
            let service = GuardianService::connect(&config).await;
            commands::day::dashboard(&service, &model, &args, &output).await?;
        }
        Command::Save { day } => {
            let service = GuardianService::connect(&config).await;
            commands::day::save(&service, &model, &day, &output).await?;
        }
        Command::History { limit } => {
            let service = GuardianService::connect(&config).await;
            commands::records::history(&service, limit, &output).await?;
        }
        Command::Show { date } => {
            let service = GuardianService::connect(&config).await;
            commands::records::show(&service, date, &output).await?;
        }
        Command::Edit {
            date,
            metrics,
            social,
            workouts,
            water,
        } => {
            let service = GuardianService::connect(&config).await;
            commands::records::edit(
                &service, &model, date, &metrics, social, workouts, water, &output,
            )
            .await?;
        }
        Command::Delete { date } => {
            let service = GuardianService::connect(&config).await;
            commands::records::delete(&service, date, &output).await?;
        }
    }

    Ok(())
}
