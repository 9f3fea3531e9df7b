pub mod calculations;
pub mod constants;
pub mod guidelines;
pub mod protein;
pub mod validation;

pub use calculations::{
    activity_multiplier, bmi, bmi_category, body_composition, estimate_body_fat_from_bmi,
    estimate_calorie_needs, macronutrients, macros_for, BmiCategory,
};
pub use constants::*;
pub use guidelines::{guidelines, is_balanced, Guideline};
pub use protein::{protein_sources, ProteinSource, PROTEIN_HACK_LINES};
pub use validation::{
    validate_body_fat_percentage, validate_calorie_target, validate_input, validate_weight,
};
