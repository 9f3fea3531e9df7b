/// Multiplier converting lb/in² to the metric BMI scale.
pub const BMI_IMPERIAL_FACTOR: f64 = 703.0;

/// BMI category lower bounds (inclusive).
pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Body-fat estimate from BMI (population regression, not diagnostic)
// ─────────────────────────────────────────────────────────────────────────────

pub const BODY_FAT_BMI_COEF: f64 = 1.20;
pub const BODY_FAT_AGE_COEF: f64 = 0.23;
pub const BODY_FAT_MALE_OFFSET: f64 = -16.2;
pub const BODY_FAT_FEMALE_OFFSET: f64 = -5.4;

/// Estimated body fat is clamped into this range.
pub const BODY_FAT_ESTIMATE_MIN: f64 = 5.0;
pub const BODY_FAT_ESTIMATE_MAX: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie estimate
// ─────────────────────────────────────────────────────────────────────────────

/// Rough resting burn per pound of body weight.
pub const BMR_KCAL_PER_LB: f64 = 12.0;

pub const ACTIVITY_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_LIGHTLY_ACTIVE: f64 = 1.375;
pub const ACTIVITY_MODERATELY_ACTIVE: f64 = 1.55;
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.725;
pub const ACTIVITY_EXTREMELY_ACTIVE: f64 = 1.9;

/// Flat daily deficit for roughly 1 lb/week of loss.
pub const DEFICIT_KCAL: f64 = 500.0;

/// Lowest calorie target the front end accepts.
pub const MIN_DAILY_CALORIES: f64 = 1200.0;

/// Highest calorie target the wizard offers.
pub const MAX_DAILY_CALORIES: f64 = 4000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro formula
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Protein grams per pound of goal body weight.
pub const PROTEIN_G_PER_LB_GOAL: f64 = 1.0;

/// Fixed share of calories assigned to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Form defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_LEAN_MASS_PCT: f64 = 100.0;
pub const DEFAULT_DESIRED_BODY_FAT: f64 = 15.0;
pub const DEFAULT_WEEKLY_LOSS: f64 = 1.0;

/// Slowest weekly loss rate the model accepts (lbs/week).
pub const MIN_WEEKLY_LOSS: f64 = 0.1;

pub const DEFAULT_PROTEIN_PCT: f64 = 30.0;
pub const DEFAULT_FAT_PCT: f64 = 25.0;
pub const DEFAULT_CARB_PCT: f64 = 45.0;

/// Weeks per month when converting the timeline.
pub const WEEKS_PER_MONTH: f64 = 4.33;
