use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::calculator::constants::*;
use crate::models::{
    ActivityLevel, BodyCompositionInput, BodyCompositionResult, Gender, MacroInput, MacroResult,
};

/// BMI classification. Bands are lower-inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI from imperial units.
///
/// Formula: weight(lb) / height(in)² × 703
pub fn bmi(weight_lbs: f64, height_inches: f64) -> f64 {
    weight_lbs / (height_inches * height_inches) * BMI_IMPERIAL_FACTOR
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::NormalWeight
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Rough body-fat percentage from BMI, age and gender.
///
/// This is a population-level regression and can be off by several points
/// for any individual. It is a starting value for people who have no
/// measurement, not a diagnosis. Clamped to 5-50%.
pub fn estimate_body_fat_from_bmi(bmi: f64, age: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => BODY_FAT_MALE_OFFSET,
        Gender::Female => BODY_FAT_FEMALE_OFFSET,
    };
    let estimate = BODY_FAT_BMI_COEF * bmi + BODY_FAT_AGE_COEF * age as f64 + offset;
    estimate.clamp(BODY_FAT_ESTIMATE_MIN, BODY_FAT_ESTIMATE_MAX)
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => ACTIVITY_SEDENTARY,
        ActivityLevel::LightlyActive => ACTIVITY_LIGHTLY_ACTIVE,
        ActivityLevel::ModeratelyActive => ACTIVITY_MODERATELY_ACTIVE,
        ActivityLevel::VeryActive => ACTIVITY_VERY_ACTIVE,
        ActivityLevel::ExtremelyActive => ACTIVITY_EXTREMELY_ACTIVE,
    }
}

/// Daily calorie estimate: weight × 12 × activity factor, minus 500 in a deficit.
///
/// No floor is applied. Callers bound the result for display.
pub fn estimate_calorie_needs(weight: f64, activity_level: ActivityLevel, is_deficit: bool) -> f64 {
    let maintenance = weight * BMR_KCAL_PER_LB * activity_multiplier(activity_level);
    if is_deficit {
        maintenance - DEFICIT_KCAL
    } else {
        maintenance
    }
}

/// Current and goal composition plus the timeline.
///
/// Input must already be validated: `desired_body_fat` in (0, 100) and a
/// `weekly_weight_loss` of at least `MIN_WEEKLY_LOSS`.
pub fn body_composition(input: &BodyCompositionInput) -> BodyCompositionResult {
    let fat_fraction = input.body_fat / 100.0;
    let current_lean_mass = input.weight * (1.0 - fat_fraction);
    let current_fat_mass = input.weight * fat_fraction;

    let goal_lean_mass = current_lean_mass * (input.desired_lean_mass_pct / 100.0);
    let goal_fat_fraction = input.desired_body_fat / 100.0;
    let goal_weight = goal_lean_mass / (1.0 - goal_fat_fraction);
    let goal_fat_mass = goal_weight * goal_fat_fraction;

    let weight_to_lose = input.weight - goal_weight;
    // Gain timelines are not modelled
    let weeks_to_goal = (weight_to_lose.max(0.0) / input.weekly_weight_loss).ceil() as u32;

    debug!(goal_weight, weight_to_lose, weeks_to_goal, "computed body composition");

    BodyCompositionResult {
        current_lean_mass,
        current_fat_mass,
        goal_lean_mass,
        goal_weight,
        goal_fat_mass,
        weight_to_lose,
        weeks_to_goal,
    }
}

/// Macro targets from the goal weight and a calorie budget.
///
/// Protein: 1 g per lb of goal weight. Fat: 25% of calories. Carbs: whatever
/// is left, floored at zero. Percentages are of the realized total. Every
/// value is rounded exactly once, here.
pub fn macronutrients(current_weight: f64, goal_weight: f64, total_calories: f64) -> MacroResult {
    debug!(current_weight, goal_weight, total_calories, "computing macros");

    let protein = goal_weight * PROTEIN_G_PER_LB_GOAL;
    let protein_calories = protein * KCAL_PER_G_PROTEIN;

    let fat = total_calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT;
    let fat_calories = fat * KCAL_PER_G_FAT;

    let remaining = total_calories - protein_calories - fat_calories;
    let carbs = (remaining / KCAL_PER_G_CARB).max(0.0);
    let carb_calories = carbs * KCAL_PER_G_CARB;

    let realized_total = protein_calories + fat_calories + carb_calories;
    let pct = |kcal: f64| {
        if realized_total > 0.0 {
            kcal / realized_total * 100.0
        } else {
            0.0
        }
    };

    MacroResult {
        protein: round_u32(protein),
        fat: round_u32(fat),
        carbs: round_u32(carbs),
        total_calories: round_u32(realized_total),
        protein_calories: round_u32(protein_calories),
        fat_calories: round_u32(fat_calories),
        carb_calories: round_u32(carb_calories),
        protein_percentage: round_u32(pct(protein_calories)),
        fat_percentage: round_u32(pct(fat_calories)),
        carb_percentage: round_u32(pct(carb_calories)),
        carbs_floored: remaining <= 0.0,
    }
}

/// `macronutrients` over a bundled input. The split rides along unused.
pub fn macros_for(input: &MacroInput) -> MacroResult {
    macronutrients(input.current_weight, input.goal_weight, input.total_calories)
}

#[inline]
fn round_u32(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> BodyCompositionInput {
        BodyCompositionInput {
            weight: 200.0,
            body_fat: 25.0,
            height_feet: 5.0,
            height_inches: 10.0,
            age: 30,
            desired_lean_mass_pct: 100.0,
            desired_body_fat: 15.0,
            weekly_weight_loss: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_bmi() {
        // 180 lb at 70 in
        let value = bmi(180.0, 70.0);
        assert!((value - 25.824).abs() < 0.01);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(bmi_category(18.49), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(24.9), BmiCategory::NormalWeight);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.99), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
        assert_eq!(bmi_category(25.0).label(), "Overweight");
    }

    #[test]
    fn test_body_fat_estimate_by_gender() {
        // 1.2 * 25 + 0.23 * 40 = 39.2
        let male = estimate_body_fat_from_bmi(25.0, 40, Gender::Male);
        let female = estimate_body_fat_from_bmi(25.0, 40, Gender::Female);
        assert!((male - 23.0).abs() < 1e-9);
        assert!((female - 33.8).abs() < 1e-9);
    }

    #[test]
    fn test_body_fat_estimate_clamped() {
        assert_eq!(estimate_body_fat_from_bmi(10.0, 18, Gender::Male), BODY_FAT_ESTIMATE_MIN);
        assert_eq!(estimate_body_fat_from_bmi(60.0, 80, Gender::Female), BODY_FAT_ESTIMATE_MAX);
    }

    #[test]
    fn test_calorie_needs() {
        let maintenance = estimate_calorie_needs(200.0, ActivityLevel::ModeratelyActive, false);
        assert!((maintenance - 3720.0).abs() < 1e-6);

        let deficit = estimate_calorie_needs(200.0, ActivityLevel::ModeratelyActive, true);
        assert!((deficit - 3220.0).abs() < 1e-6);

        let unknown = estimate_calorie_needs(100.0, ActivityLevel::parse("astronaut"), false);
        assert!((unknown - 1440.0).abs() < 1e-6);
    }

    #[test]
    fn test_calorie_needs_has_no_floor() {
        let low = estimate_calorie_needs(80.0, ActivityLevel::Sedentary, true);
        assert!((low - 652.0).abs() < 1e-6);
    }

    #[test]
    fn test_body_composition_example() {
        let result = body_composition(&sample_input());
        assert!((result.current_lean_mass - 150.0).abs() < 1e-9);
        assert!((result.current_fat_mass - 50.0).abs() < 1e-9);
        assert!((result.goal_lean_mass - 150.0).abs() < 1e-9);
        assert!((result.goal_weight - 176.47).abs() < 0.01);
        assert!((result.goal_fat_mass - 26.47).abs() < 0.01);
        assert!((result.weight_to_lose - 23.53).abs() < 0.01);
        assert_eq!(result.weeks_to_goal, 24);
    }

    #[test]
    fn test_body_composition_gain_has_zero_weeks() {
        let input = BodyCompositionInput {
            desired_lean_mass_pct: 120.0,
            ..sample_input()
        };
        let result = body_composition(&input);
        assert!(result.weight_to_lose < 0.0);
        assert_eq!(result.weeks_to_goal, 0);
    }

    #[test]
    fn test_macros_example() {
        let macros = macronutrients(200.0, 180.0, 2000.0);
        assert_eq!(macros.protein, 180);
        assert_eq!(macros.protein_calories, 720);
        assert_eq!(macros.fat, 56);
        assert_eq!(macros.fat_calories, 500);
        assert_eq!(macros.carbs, 195);
        assert_eq!(macros.carb_calories, 780);
        assert_eq!(macros.total_calories, 2000);
        assert_eq!(
            (macros.protein_percentage, macros.fat_percentage, macros.carb_percentage),
            (36, 25, 39)
        );
        assert!(!macros.carbs_floored);
    }

    #[test]
    fn test_macros_carbs_floor_at_zero() {
        let macros = macronutrients(260.0, 250.0, 1200.0);
        assert_eq!(macros.protein_calories, 1000);
        assert_eq!(macros.carbs, 0);
        assert_eq!(macros.carb_calories, 0);
        assert!(macros.carbs_floored);
        // Realized total exceeds the requested 1200
        assert_eq!(macros.total_calories, 1300);
        assert_eq!(macros.carb_percentage, 0);
    }

    #[test]
    fn test_macros_degenerate_total() {
        let macros = macronutrients(0.0, 0.0, 0.0);
        assert_eq!(macros.total_calories, 0);
        assert_eq!(macros.protein_percentage, 0);
        assert_eq!(macros.fat_percentage, 0);
    }
}
