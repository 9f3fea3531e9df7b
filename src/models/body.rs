use serde::{Deserialize, Serialize};

use crate::calculator::constants::{
    DEFAULT_DESIRED_BODY_FAT, DEFAULT_LEAN_MASS_PCT, DEFAULT_WEEKLY_LOSS, WEEKS_PER_MONTH,
};
use crate::models::macros::MacroSplit;

/// Gender used by the body-fat estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Activity level used to scale the calorie estimate.
///
/// Unrecognized names parse as `Sedentary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    #[default]
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "lightly_active" => ActivityLevel::LightlyActive,
            "moderately_active" => ActivityLevel::ModeratelyActive,
            "very_active" => ActivityLevel::VeryActive,
            "extremely_active" => ActivityLevel::ExtremelyActive,
            _ => ActivityLevel::Sedentary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately active (3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (6-7 days/week)",
            ActivityLevel::ExtremelyActive => "Extremely active (physical job + training)",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        ActivityLevel::parse(&value)
    }
}

impl From<ActivityLevel> for String {
    fn from(value: ActivityLevel) -> Self {
        value.as_str().to_string()
    }
}

/// One snapshot of everything the user has entered.
///
/// Weights are in pounds, percentages are 0-100. The snapshot is never
/// mutated by the calculator; a changed field means a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyCompositionInput {
    pub weight: f64,
    pub body_fat: f64,
    pub height_feet: f64,
    pub height_inches: f64,
    pub age: u32,
    pub gender: Gender,
    /// Goal lean mass as a percentage of current lean mass.
    pub desired_lean_mass_pct: f64,
    pub desired_body_fat: f64,
    /// Pounds per week.
    pub weekly_weight_loss: f64,
    pub daily_calories: Option<f64>,
    pub activity_level: ActivityLevel,
    /// The split the user configured. Shown in the report only.
    pub split: MacroSplit,
}

impl Default for BodyCompositionInput {
    fn default() -> Self {
        Self {
            weight: 0.0,
            body_fat: 0.0,
            height_feet: 0.0,
            height_inches: 0.0,
            age: 0,
            gender: Gender::Male,
            desired_lean_mass_pct: DEFAULT_LEAN_MASS_PCT,
            desired_body_fat: DEFAULT_DESIRED_BODY_FAT,
            weekly_weight_loss: DEFAULT_WEEKLY_LOSS,
            daily_calories: None,
            activity_level: ActivityLevel::default(),
            split: MacroSplit::default(),
        }
    }
}

impl BodyCompositionInput {
    #[inline]
    pub fn total_height_inches(&self) -> f64 {
        self.height_feet * 12.0 + self.height_inches
    }

    /// Daily calories, if the user set a positive target.
    pub fn calorie_target(&self) -> Option<f64> {
        self.daily_calories.filter(|c| *c > 0.0)
    }
}

/// Derived body composition. Recomputed from scratch for every input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyCompositionResult {
    pub current_lean_mass: f64,
    pub current_fat_mass: f64,
    pub goal_lean_mass: f64,
    pub goal_weight: f64,
    pub goal_fat_mass: f64,
    /// Negative when the goal implies gaining weight.
    pub weight_to_lose: f64,
    pub weeks_to_goal: u32,
}

impl BodyCompositionResult {
    pub fn fat_to_lose(&self) -> f64 {
        self.current_fat_mass - self.goal_fat_mass
    }

    pub fn months_to_goal(&self) -> u32 {
        (self.weeks_to_goal as f64 / WEEKS_PER_MONTH).ceil() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_parse_falls_back_to_sedentary() {
        assert_eq!(ActivityLevel::parse("very_active"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::parse("couch"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::parse(""), ActivityLevel::Sedentary);
    }

    #[test]
    fn test_total_height() {
        let input = BodyCompositionInput {
            height_feet: 5.0,
            height_inches: 10.0,
            ..Default::default()
        };
        assert!((input.total_height_inches() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_input_json_uses_camel_case_and_defaults() {
        let json = r#"{"weight": 200, "bodyFat": 25, "gender": "female", "activityLevel": "unknown"}"#;
        let input: BodyCompositionInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.activity_level, ActivityLevel::Sedentary);
        assert!((input.desired_body_fat - DEFAULT_DESIRED_BODY_FAT).abs() < 1e-9);
        assert!(input.calorie_target().is_none());
    }

    #[test]
    fn test_months_to_goal_rounds_up() {
        let result = BodyCompositionResult {
            current_lean_mass: 150.0,
            current_fat_mass: 50.0,
            goal_lean_mass: 150.0,
            goal_weight: 176.0,
            goal_fat_mass: 26.0,
            weight_to_lose: 24.0,
            weeks_to_goal: 24,
        };
        // 24 / 4.33 = 5.54
        assert_eq!(result.months_to_goal(), 6);
        assert!((result.fat_to_lose() - 24.0).abs() < 1e-9);
    }
}
