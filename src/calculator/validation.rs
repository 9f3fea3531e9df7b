//! Input checks that run before the numeric model.
//!
//! The model itself never validates; anything that reaches
//! `body_composition` is assumed to have passed `validate_input`.

use crate::calculator::constants::{MIN_DAILY_CALORIES, MIN_WEEKLY_LOSS};
use crate::error::{RecompError, Result};
use crate::models::BodyCompositionInput;

fn require(ok: bool, message: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(RecompError::InvalidInput(message.to_string()))
    }
}

fn is_percentage(value: f64) -> bool {
    value > 0.0 && value < 100.0
}

/// Hard gate for the body composition model.
pub fn validate_input(input: &BodyCompositionInput) -> Result<()> {
    require(
        input.weight.is_finite() && input.weight > 0.0,
        "Weight must be greater than 0",
    )?;
    require(
        is_percentage(input.body_fat),
        "Body fat must be between 0 and 100% (exclusive)",
    )?;
    require(
        input.desired_lean_mass_pct.is_finite() && input.desired_lean_mass_pct > 0.0,
        "Desired lean mass percentage must be greater than 0",
    )?;
    require(
        is_percentage(input.desired_body_fat),
        "Target body fat must be between 0 and 100% (exclusive)",
    )?;
    require(
        input.weekly_weight_loss.is_finite() && input.weekly_weight_loss >= MIN_WEEKLY_LOSS,
        &format!("Weekly weight loss must be at least {} lbs/week", MIN_WEEKLY_LOSS),
    )?;
    Ok(())
}

/// Calorie targets below the floor are refused by the front end.
pub fn validate_calorie_target(calories: f64) -> Result<()> {
    require(
        calories.is_finite() && calories >= MIN_DAILY_CALORIES,
        &format!("Daily calories must be at least {:.0}", MIN_DAILY_CALORIES),
    )
}

/// Plausible body weight in pounds. Used for warnings only.
pub fn validate_weight(weight: f64) -> bool {
    weight > 0.0 && weight < 1000.0
}

/// Plausible body fat percentage. Used for warnings only.
pub fn validate_body_fat_percentage(body_fat: f64) -> bool {
    body_fat > 0.0 && body_fat < 50.0
}
