//! BMR, TDEE, and weight-trajectory calculations
//!
//! Provides the projection engine: Mifflin-St Jeor BMR, activity-scaled
//! TDEE, and a linear 30-day weight path driven by the planned caloric
//! intake.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Permissive Inputs**: numeric inputs are never range-rejected here;
//!    out-of-range values propagate arithmetically (see [`crate::validation`]
//!    for the opt-in layer)
//! 3. **Named Constants**: the preset table and the kcal/kg equivalence are
//!    auditable constants, not inline magic numbers
//!
//! The trajectory is a deliberate simplification: purely linear, with no
//! metabolic adaptation, water, or muscle-mass modeling. The UI surfaces
//! this as a caveat to the user.

use crate::types::{ActivityLevel, PersonProfile, Plan, ProjectionResult, Sex, WeightPoint};

// ============================================================================
// Constants
// ============================================================================

/// Approximate cumulative caloric difference equivalent to 1 kg of
/// body-mass change.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Default projection horizon in days (path length is horizon + 1).
pub const DEFAULT_PROJECTION_DAYS: u32 = 30;

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn bmr_mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure from a BMR and a preset
/// activity level
///
/// TDEE = BMR × Activity Multiplier
pub fn tdee(bmr_kcal: f64, activity: ActivityLevel) -> f64 {
    tdee_with_multiplier(bmr_kcal, activity.multiplier())
}

/// TDEE from a raw multiplier. The five [`ActivityLevel`] presets are the
/// designed set; any other positive value is accepted arithmetically.
pub fn tdee_with_multiplier(bmr_kcal: f64, activity_multiplier: f64) -> f64 {
    bmr_kcal * activity_multiplier
}

// ============================================================================
// Weight Trajectory
// ============================================================================

/// Project a linear weight path from a constant daily caloric difference.
///
/// For each day d in 0..=num_days:
/// weight(d) = start + (daily_diff × d) / [`KCAL_PER_KG`]
///
/// Always returns exactly `num_days + 1` points with contiguous day
/// indices starting at 0; point 0 is the starting weight unchanged.
pub fn project_weight_path(
    start_weight_kg: f64,
    daily_diff_kcal: f64,
    num_days: u32,
) -> Vec<WeightPoint> {
    (0..=num_days)
        .map(|day| WeightPoint {
            day,
            weight_kg: start_weight_kg + (daily_diff_kcal * day as f64) / KCAL_PER_KG,
        })
        .collect()
}

/// Run the full projection: BMR, TDEE, caloric difference, and the
/// 30-day trajectory.
///
/// This is the single entry point the presentation layer re-invokes on
/// every input change; it holds no state between calls.
pub fn simulate(profile: &PersonProfile, activity: ActivityLevel, plan: Plan) -> ProjectionResult {
    let bmr_kcal = bmr_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let tdee_kcal = tdee(bmr_kcal, activity);
    let daily_diff_kcal = plan.daily_intake_kcal - tdee_kcal;

    let weight_path = project_weight_path(
        profile.weight_kg,
        daily_diff_kcal,
        DEFAULT_PROJECTION_DAYS,
    );
    // Path is never empty: project_weight_path yields num_days + 1 points.
    let final_weight_kg = weight_path
        .last()
        .map(|p| p.weight_kg)
        .unwrap_or(profile.weight_kg);

    tracing::debug!(
        bmr_kcal,
        tdee_kcal,
        daily_diff_kcal,
        final_weight_kg,
        "computed weight projection"
    );

    ProjectionResult {
        bmr_kcal,
        tdee_kcal,
        daily_diff_kcal,
        weight_path,
        final_weight_kg,
    }
}
