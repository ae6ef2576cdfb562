//! Weight Simulator WASM Module
//!
//! WebAssembly bindings exposing the projection engine to the browser UI.
//! The page re-invokes these exports on every input change and renders the
//! returned metrics and trajectory; no state lives on this side of the
//! boundary.

use wasm_bindgen::prelude::*;
use weight_sim_engine::{
    bmr_mifflin_st_jeor, project_weight_path, simulate, tdee_with_multiplier, ActivityLevel,
    PersonProfile, Plan, Sex,
};

/// Calculate BMR (Mifflin-St Jeor) from weight (kg), height (cm), age,
/// and sex ("M" or "F").
#[wasm_bindgen]
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: &str) -> Result<f64, JsError> {
    let sex: Sex = sex.parse()?;
    Ok(bmr_mifflin_st_jeor(weight_kg, height_cm, age_years, sex))
}

/// Calculate TDEE from anthropometrics and an activity multiplier.
#[wasm_bindgen]
pub fn tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity_multiplier: f64,
) -> Result<f64, JsError> {
    let bmr = bmr(weight_kg, height_cm, age_years, sex)?;
    Ok(tdee_with_multiplier(bmr, activity_multiplier))
}

/// Project the weight trajectory as a flat array of kg values,
/// day 0 through `num_days` inclusive (chart-ready).
#[wasm_bindgen]
pub fn project_weights(start_weight_kg: f64, daily_diff_kcal: f64, num_days: u32) -> Vec<f64> {
    project_weight_path(start_weight_kg, daily_diff_kcal, num_days)
        .into_iter()
        .map(|p| p.weight_kg)
        .collect()
}

/// Run the full 30-day simulation and return the result as JSON
/// (`bmr_kcal`, `tdee_kcal`, `daily_diff_kcal`, `weight_path`,
/// `final_weight_kg`) for the metric and chart widgets.
#[wasm_bindgen]
pub fn simulate_json(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity_level: &str,
    daily_intake_kcal: f64,
) -> Result<String, JsError> {
    let profile = PersonProfile {
        weight_kg,
        height_cm,
        age_years,
        sex: sex.parse()?,
    };
    let activity: ActivityLevel = activity_level.parse()?;
    let result = simulate(&profile, activity, Plan { daily_intake_kcal });
    Ok(serde_json::to_string(&result)?)
}

/// The fixed activity-level preset table as JSON
/// (`[{ "value": "sedentary", "label": ..., "multiplier": 1.2 }, ...]`),
/// so the UI builds its select box from the engine's own table.
#[wasm_bindgen]
pub fn activity_levels_json() -> String {
    let entries: Vec<serde_json::Value> = ActivityLevel::ALL
        .iter()
        .map(|level| {
            serde_json::json!({
                "value": serde_json::to_value(level).expect("enum serializes"),
                "label": level.description(),
                "multiplier": level.multiplier(),
            })
        })
        .collect();
    serde_json::to_string(&entries).expect("table serializes")
}
