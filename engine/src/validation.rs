//! Input validation functions
//!
//! An opt-in layer for the presentation boundary. The projection engine
//! itself never calls these: it computes on whatever the user typed, and
//! out-of-range values propagate arithmetically. A UI that wants sane
//! ranges validates before invoking [`crate::projection::simulate`], either
//! through these functions or via the `validator` derives on
//! [`crate::types::PersonProfile`] and [`crate::types::Plan`].

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm (covers infants to tallest recorded humans)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(age_years: i32) -> Result<(), String> {
    if age_years < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age_years > 150 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(())
}

/// Validate planned daily intake (kcal)
pub fn validate_intake_kcal(intake_kcal: f64) -> Result<(), String> {
    if intake_kcal.is_nan() || intake_kcal.is_infinite() {
        return Err("Intake must be a valid number".to_string());
    }
    if intake_kcal < 0.0 {
        return Err("Intake cannot be negative".to_string());
    }
    if intake_kcal > 50000.0 {
        return Err("Intake unreasonably high".to_string());
    }
    Ok(())
}
