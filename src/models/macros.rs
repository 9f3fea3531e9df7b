use serde::{Deserialize, Serialize};

use crate::calculator::constants::{DEFAULT_CARB_PCT, DEFAULT_FAT_PCT, DEFAULT_PROTEIN_PCT};

/// A protein/fat/carb percentage split as configured by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            protein: DEFAULT_PROTEIN_PCT,
            fat: DEFAULT_FAT_PCT,
            carbs: DEFAULT_CARB_PCT,
        }
    }
}

impl MacroSplit {
    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Inputs for the macro formula.
///
/// `split` is carried along for display; the formula itself never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroInput {
    pub current_weight: f64,
    pub goal_weight: f64,
    pub total_calories: f64,
    pub split: MacroSplit,
}

/// Daily macro targets, rounded once at output.
///
/// Percentages are of the realized total, which drifts from the requested
/// calories when carbs bottom out at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroResult {
    pub protein: u32,
    pub fat: u32,
    pub carbs: u32,
    pub total_calories: u32,
    pub protein_calories: u32,
    pub fat_calories: u32,
    pub carb_calories: u32,
    pub protein_percentage: u32,
    pub fat_percentage: u32,
    pub carb_percentage: u32,
    /// Protein and fat alone met or exceeded the calorie target.
    pub carbs_floored: bool,
}

impl MacroResult {
    /// The realized split, as fed to the guideline advisor.
    pub fn realized_split(&self) -> MacroSplit {
        MacroSplit {
            protein: self.protein_percentage as f64,
            fat: self.fat_percentage as f64,
            carbs: self.carb_percentage as f64,
        }
    }
}
