// ABOUTME: Workout gating, hydration tracking, and alcohol impact guidance
// ABOUTME: Turns a readiness assessment and the calendar into concrete daily actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fuxing Guardian Contributors

//! Recommendation Engine
//!
//! Gate priority: a red flag or tripped breaker forces safe mode; otherwise
//! weekends get the reset protocol; otherwise weekdays get a micro workout
//! sized to the free time available.

use crate::config::HydrationConfig;
use crate::scoring_engine::ReadinessAssessment;
use chrono::{Datelike, NaiveDate, Weekday};
use guardian_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One prescribed exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    /// Exercise name
    pub name: &'static str,
    /// Reps or duration
    pub prescription: &'static str,
}

/// Free time available for a micro workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    /// Three minutes between meetings
    #[default]
    ThreeMinutes,
    /// Ten minutes
    TenMinutes,
    /// Fifteen minutes or more
    FifteenMinutes,
}

impl TimeSlot {
    /// Slot length in minutes
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::ThreeMinutes => 3,
            Self::TenMinutes => 10,
            Self::FifteenMinutes => 15,
        }
    }

    /// Exercises that fit in this slot
    #[must_use]
    pub fn exercises(self) -> Vec<Exercise> {
        match self {
            Self::ThreeMinutes => vec![
                Exercise {
                    name: "Office chair squats",
                    prescription: "15 reps",
                },
                Exercise {
                    name: "Wall push-ups",
                    prescription: "15 reps",
                },
            ],
            Self::TenMinutes => vec![
                Exercise {
                    name: "High knees in place",
                    prescription: "3 minutes",
                },
                Exercise {
                    name: "Stair climbing, slightly breathless",
                    prescription: "5 minutes",
                },
                Exercise {
                    name: "Deep breathing",
                    prescription: "2 minutes",
                },
            ],
            Self::FifteenMinutes => vec![Exercise {
                name: "Brisk trail walk, slightly breathless",
                prescription: "15 minutes continuous",
            }],
        }
    }
}

impl FromStr for TimeSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches("min").trim() {
            "3" => Ok(Self::ThreeMinutes),
            "10" => Ok(Self::TenMinutes),
            "15" => Ok(Self::FifteenMinutes),
            other => Err(AppError::invalid_input(format!(
                "Unknown time slot '{other}'. Valid options: 3, 10, 15"
            ))),
        }
    }
}

/// Why safe mode was forced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafeModeReason {
    /// Systolic or heart rate red flag
    RedFlag,
    /// Predictive circuit breaker tripped
    CircuitBreaker,
}

/// Weekend reset protocol tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetTask {
    /// 14-hour fast: delay breakfast to 10:00 to clear insulin
    IntermittentFast,
    /// 30-minute forest walk to reset the vagus nerve
    NatureWalk,
}

/// How much of the weekend reset was done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetCompletion {
    /// Neither task done: the week's stress carries over
    NotStarted,
    /// One of the two tasks done
    Partial,
    /// Both tasks done
    Complete,
}

impl ResetCompletion {
    /// Classify from the two task checkboxes
    #[must_use]
    pub const fn evaluate(fasted: bool, walked: bool) -> Self {
        match (fasted, walked) {
            (true, true) => Self::Complete,
            (false, false) => Self::NotStarted,
            _ => Self::Partial,
        }
    }

    /// Feedback shown for this level of completion
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotStarted => "No reset today: high stress remains, drink more water",
            Self::Partial => "Reset half done; finish the other task before the week starts",
            Self::Complete => "Reset protocol executed perfectly",
        }
    }
}

/// What kind of training is allowed today
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WorkoutGate {
    /// No resistance training; breathing only
    SafeMode {
        /// Trigger
        reason: SafeModeReason,
        /// What to do instead
        guidance: &'static str,
    },
    /// Weekend reset protocol
    WeekendReset {
        /// Tasks to complete
        tasks: Vec<ResetTask>,
    },
    /// Weekday micro workout
    MicroWorkout {
        /// Free time available
        slot: TimeSlot,
        /// Prescribed exercises
        exercises: Vec<Exercise>,
    },
}

/// Water progress for the day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrationStatus {
    /// Goal (cc)
    pub goal_cc: u32,
    /// Consumed so far (cc)
    pub intake_cc: u32,
    /// `min(intake / goal, 1.0)`
    pub progress: f64,
}

impl HydrationStatus {
    /// Whether the goal is reached
    #[must_use]
    pub const fn goal_met(&self) -> bool {
        self.intake_cc >= self.goal_cc
    }
}

/// Drink category for alcohol impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholType {
    /// Whisky, sorghum liquor
    Spirits,
    /// Wine
    Wine,
    /// Beer and cocktails
    Beer,
}

impl AlcoholType {
    /// Hours of stalled fat burning per drink
    #[must_use]
    pub const fn burn_pause_hours_per_drink(self) -> f64 {
        match self {
            Self::Spirits => 1.5,
            Self::Wine | Self::Beer => 1.0,
        }
    }
}

impl FromStr for AlcoholType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spirits" | "whisky" | "liquor" => Ok(Self::Spirits),
            "wine" => Ok(Self::Wine),
            "beer" | "cocktail" => Ok(Self::Beer),
            other => Err(AppError::invalid_input(format!(
                "Unknown drink type '{other}'. Valid options: spirits, wine, beer"
            ))),
        }
    }
}

/// Physiological cost of tonight's drinking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlcoholImpact {
    /// Drink category
    pub alcohol_type: AlcoholType,
    /// Number of drinks planned
    pub drinks: u32,
    /// Hours with fat burning stalled; starch eaten meanwhile goes to visceral fat
    pub fat_burn_pause_hours: f64,
    /// Warnings to show
    pub warnings: Vec<&'static str>,
}

/// Metabolic aging insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "direction", content = "years", rename_all = "snake_case")]
pub enum AgeGapInsight {
    /// Body age above actual age
    Older(u32),
    /// Body age at or below actual age
    Younger(u32),
}

impl AgeGapInsight {
    /// Classify `body_age - actual_age`
    #[must_use]
    pub fn from_gap(gap: i64) -> Self {
        let years = u32::try_from(gap.unsigned_abs()).unwrap_or(u32::MAX);
        if gap > 0 {
            Self::Older(years)
        } else {
            Self::Younger(years)
        }
    }
}

impl fmt::Display for AgeGapInsight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Older(years) => write!(f, "aging +{years} years"),
            Self::Younger(years) => write!(f, "younger by {years} years"),
        }
    }
}

/// Eating order for every meal: fiber first blunts the glucose spike
const MEAL_ORDER: [&str; 3] = [
    "Vegetables first",
    "Then meat or fish",
    "Rice last, half the usual portion",
];

/// Recommendation engine
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Saturday or Sunday
    #[must_use]
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Decide what training is allowed on `date`
    #[must_use]
    pub fn workout_gate(
        assessment: &ReadinessAssessment,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> WorkoutGate {
        if assessment.red_flag {
            return WorkoutGate::SafeMode {
                reason: SafeModeReason::RedFlag,
                guidance: "No resistance training. Do 5 minutes of diaphragmatic breathing.",
            };
        }

        if assessment
            .risk
            .as_ref()
            .is_some_and(|risk| risk.breaker_tripped)
        {
            return WorkoutGate::SafeMode {
                reason: SafeModeReason::CircuitBreaker,
                guidance: "Projected risk is high. Skip intense work; walk gently and breathe deeply for 5 minutes.",
            };
        }

        if Self::is_weekend(date) {
            return WorkoutGate::WeekendReset {
                tasks: vec![ResetTask::IntermittentFast, ResetTask::NatureWalk],
            };
        }

        WorkoutGate::MicroWorkout {
            slot,
            exercises: slot.exercises(),
        }
    }

    /// Meal order that avoids blood sugar spikes
    #[must_use]
    pub const fn meal_order() -> &'static [&'static str] {
        &MEAL_ORDER
    }

    /// Confirmation for skipping drinks; `None` while a social event is active
    #[must_use]
    pub const fn no_drinks_confirmation(social_mode: bool) -> Option<&'static str> {
        if social_mode {
            None
        } else {
            Some("Perfect defense! No drinking today, fat burning stays efficient")
        }
    }

    /// Water progress against the day's goal
    #[must_use]
    pub fn hydration(config: &HydrationConfig, social_mode: bool, intake_cc: u32) -> HydrationStatus {
        let goal_cc = config.goal_for(social_mode);
        let progress = if goal_cc == 0 {
            1.0
        } else {
            (f64::from(intake_cc) / f64::from(goal_cc)).min(1.0)
        };
        HydrationStatus {
            goal_cc,
            intake_cc,
            progress,
        }
    }

    /// Fat-burn pause and warnings for planned drinks
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `drinks` is zero
    pub fn alcohol_impact(alcohol_type: AlcoholType, drinks: u32) -> AppResult<AlcoholImpact> {
        if drinks == 0 {
            return Err(AppError::value_out_of_range(
                "Planned drinks must be at least 1",
            ));
        }

        let mut warnings = vec![
            "Fat burning stops while the liver clears alcohol; starch eaten now turns into visceral fat",
            "Detox keeps drawing on organ reserves and accelerates metabolic aging",
        ];
        warnings.push(if alcohol_type == AlcoholType::Beer {
            "Sugar plus alcohol triples visceral fat storage efficiency; avoid beer and cocktails"
        } else {
            "Keep to the 1:1 rule: one glass of water per drink to cool the liver"
        });

        Ok(AlcoholImpact {
            alcohol_type,
            drinks,
            fat_burn_pause_hours: f64::from(drinks) * alcohol_type.burn_pause_hours_per_drink(),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring_engine::{ReadinessStatus, RiskAssessment};

    fn assessment(red_flag: bool, tripped: bool) -> ReadinessAssessment {
        ReadinessAssessment {
            readiness_score: 62,
            red_flag,
            status: ReadinessStatus::MetabolicOverload,
            risk: Some(RiskAssessment {
                model: "trend_circuit_breaker".to_owned(),
                risk_probability: if tripped { 70 } else { 40 },
                trend_slope: Some(0.0),
                breaker_tripped: tripped,
                factors: Vec::new(),
            }),
        }
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    #[test]
    fn test_red_flag_beats_weekend() {
        let gate = RecommendationEngine::workout_gate(
            &assessment(true, false),
            saturday(),
            TimeSlot::TenMinutes,
        );
        assert!(matches!(
            gate,
            WorkoutGate::SafeMode {
                reason: SafeModeReason::RedFlag,
                ..
            }
        ));
    }

    #[test]
    fn test_breaker_forces_safe_mode() {
        let gate = RecommendationEngine::workout_gate(
            &assessment(false, true),
            monday(),
            TimeSlot::TenMinutes,
        );
        assert!(matches!(
            gate,
            WorkoutGate::SafeMode {
                reason: SafeModeReason::CircuitBreaker,
                ..
            }
        ));
    }

    #[test]
    fn test_weekend_reset_and_weekday_workout() {
        let ok = assessment(false, false);
        assert!(matches!(
            RecommendationEngine::workout_gate(&ok, saturday(), TimeSlot::ThreeMinutes),
            WorkoutGate::WeekendReset { .. }
        ));

        let gate = RecommendationEngine::workout_gate(&ok, monday(), TimeSlot::TenMinutes);
        assert!(matches!(
            gate,
            WorkoutGate::MicroWorkout { slot: TimeSlot::TenMinutes, ref exercises } if exercises.len() == 3
        ));
    }

    #[test]
    fn test_reset_completion() {
        assert_eq!(ResetCompletion::evaluate(false, false), ResetCompletion::NotStarted);
        assert_eq!(ResetCompletion::evaluate(true, false), ResetCompletion::Partial);
        assert_eq!(ResetCompletion::evaluate(true, true), ResetCompletion::Complete);
        assert!(ResetCompletion::NotStarted.message().contains("drink more water"));
    }

    #[test]
    fn test_meal_order_and_no_drinks_confirmation() {
        let order = RecommendationEngine::meal_order();
        assert_eq!(order.len(), 3);
        assert!(order[0].starts_with("Vegetables"));
        assert!(order[2].contains("half"));

        assert!(RecommendationEngine::no_drinks_confirmation(false)
            .is_some_and(|msg| msg.contains("fat burning stays efficient")));
        assert_eq!(RecommendationEngine::no_drinks_confirmation(true), None);
    }

    #[test]
    fn test_hydration_progress_caps_at_one() {
        let config = HydrationConfig::default();
        let status = RecommendationEngine::hydration(&config, false, 500);
        assert!((status.progress - 0.25).abs() < f64::EPSILON);
        assert!(!status.goal_met());

        let status = RecommendationEngine::hydration(&config, true, 3500);
        assert_eq!(status.goal_cc, 3000);
        assert!((status.progress - 1.0).abs() < f64::EPSILON);
        assert!(status.goal_met());
    }

    #[test]
    fn test_alcohol_impact() {
        let impact = RecommendationEngine::alcohol_impact(AlcoholType::Spirits, 3).unwrap();
        assert!((impact.fat_burn_pause_hours - 4.5).abs() < f64::EPSILON);
        assert!(impact.warnings[2].contains("1:1"));

        let beer = RecommendationEngine::alcohol_impact(AlcoholType::Beer, 2).unwrap();
        assert!((beer.fat_burn_pause_hours - 2.0).abs() < f64::EPSILON);
        assert!(beer.warnings[2].contains("beer"));

        assert!(RecommendationEngine::alcohol_impact(AlcoholType::Wine, 0).is_err());
    }

    #[test]
    fn test_time_slot_parsing() {
        assert_eq!("3".parse::<TimeSlot>().unwrap(), TimeSlot::ThreeMinutes);
        assert_eq!("15min".parse::<TimeSlot>().unwrap(), TimeSlot::FifteenMinutes);
        assert!("7".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_age_gap_insight() {
        assert_eq!(AgeGapInsight::from_gap(15), AgeGapInsight::Older(15));
        assert_eq!(AgeGapInsight::from_gap(-4), AgeGapInsight::Younger(4));
        assert_eq!(AgeGapInsight::from_gap(0).to_string(), "younger by 0 years");
    }
}
