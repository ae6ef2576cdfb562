//! Input and output types for the projection engine
//!
//! All entities are plain immutable value records: created fresh from the
//! current UI state on every invocation, consumed by the engine, discarded
//! after rendering. Nothing here has identity or is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::errors::EngineError;

// ============================================================================
// Biological Sex
// ============================================================================

/// Biological sex for the Mifflin-St Jeor equation.
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = EngineError;

    /// Accepts the single-letter wire values used by the UI ("M"/"F") as
    /// well as the long forms, case-insensitive. Anything else is an
    /// `InvalidArgument` — never silently defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            _ => Err(EngineError::InvalidArgument(format!(
                "Unknown sex: {} (expected M or F)",
                s
            ))),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for TDEE calculation.
///
/// A fixed 5-entry preset table; the multipliers are the designed set and
/// the UI builds its select box from [`ActivityLevel::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise (office work)
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Intense physical labor
    ExtraActive,
}

impl ActivityLevel {
    /// All presets, in ascending multiplier order.
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical labor",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(EngineError::InvalidArgument(format!(
                "Unknown activity level: {}",
                s
            ))),
        }
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Anthropometric inputs for one projection run.
///
/// The validation ranges are an optional layer (see [`crate::validation`]);
/// the engine itself computes on whatever values it is handed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonProfile {
    /// Current weight in kilograms
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight_kg: f64,
    /// Height in centimeters
    #[validate(range(min = 50.0, max = 300.0))]
    pub height_cm: f64,
    /// Age in years
    #[validate(range(min = 1, max = 150))]
    pub age_years: i32,
    /// Biological sex for the BMR equation
    pub sex: Sex,
}

/// Planned daily caloric intake.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct Plan {
    #[validate(range(min = 0.0, max = 50000.0))]
    pub daily_intake_kcal: f64,
}

// ============================================================================
// Outputs
// ============================================================================

/// One sample of the projected trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPoint {
    /// Days from today (0 = starting weight)
    pub day: u32,
    /// Projected weight in kilograms
    pub weight_kg: f64,
}

/// Full projection output, recomputed from live input on every change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Basal Metabolic Rate (Mifflin-St Jeor)
    pub bmr_kcal: f64,
    /// Total Daily Energy Expenditure
    pub tdee_kcal: f64,
    /// Planned intake minus TDEE (surplus positive, deficit negative)
    pub daily_diff_kcal: f64,
    /// Day-indexed trajectory, day 0 through the horizon inclusive
    pub weight_path: Vec<WeightPoint>,
    /// Weight at the projection horizon (last path point)
    pub final_weight_kg: f64,
}

impl ProjectionResult {
    /// Net projected change over the horizon, in kilograms.
    pub fn weight_change_kg(&self) -> f64 {
        let start = self
            .weight_path
            .first()
            .map(|p| p.weight_kg)
            .unwrap_or(self.final_weight_kg);
        self.final_weight_kg - start
    }
}
