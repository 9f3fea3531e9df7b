//! Plain-language advice for a protein/fat/carb percentage split.
//!
//! Each macro gets exactly one band message, in protein, fat, carb order.
//! Combination, meal-timing and practical-tip rules follow in a fixed order;
//! every rule fires independently and none suppresses another.

use std::fmt;

/// A single piece of advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guideline {
    /// Decorative prefix, dropped from plain-text output.
    pub symbol: &'static str,
    pub headline: &'static str,
    pub body: &'static str,
}

impl Guideline {
    const fn new(symbol: &'static str, headline: &'static str, body: &'static str) -> Self {
        Self {
            symbol,
            headline,
            body,
        }
    }

    /// Text without the symbol or emphasis markers.
    pub fn plain(&self) -> String {
        format!("{}: {}", self.headline, self.body)
    }
}

impl fmt::Display for Guideline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} **{}**: {}", self.symbol, self.headline, self.body)
    }
}

// Protein bands
const HIGH_PROTEIN: Guideline = Guideline::new(
    "🥩",
    "High Protein Approach",
    "Excellent for muscle preservation during fat loss. Focus on lean sources like chicken, fish, and whey protein. May increase satiety and thermogenesis.",
);
const MODERATE_HIGH_PROTEIN: Guideline = Guideline::new(
    "💪",
    "Moderate-High Protein",
    "Good balance for body recomposition. Supports muscle maintenance while allowing flexibility with other macros.",
);
const STANDARD_PROTEIN: Guideline = Guideline::new(
    "🍗",
    "Standard Protein",
    "Meeting basic requirements. Consider increasing if goal is muscle preservation or fat loss.",
);
const LOW_PROTEIN: Guideline = Guideline::new(
    "⚠️",
    "Low Protein Warning",
    "Below optimal for body composition goals. Consider increasing to at least 25-30% for better results.",
);

// Fat bands
const VERY_HIGH_FAT: Guideline = Guideline::new(
    "🥑",
    "Very High Fat (Ketogenic-style)",
    "Excellent for metabolic flexibility and appetite control. Ensure adequate electrolytes and consider MCT oil. May reduce carb cravings significantly.",
);
const HIGH_FAT: Guideline = Guideline::new(
    "🧈",
    "High Fat Approach",
    "Good for hormone production and satiety. Focus on quality sources: avocados, nuts, olive oil, fatty fish. Great for stable energy.",
);
const MODERATE_FAT: Guideline = Guideline::new(
    "🥜",
    "Moderate Fat",
    "Balanced approach supporting hormone production. Include omega-3s from fish oil or fatty fish 2-3x per week.",
);
const LOWER_FAT: Guideline = Guideline::new(
    "🐟",
    "Lower Fat",
    "Ensure you're getting essential fatty acids. Don't go below 15% long-term as it may affect hormone production.",
);
const VERY_LOW_FAT: Guideline = Guideline::new(
    "⚠️",
    "Very Low Fat Warning",
    "Below recommended minimums. May negatively impact hormone production, vitamin absorption, and satiety.",
);

// Carb bands
const HIGH_CARB: Guideline = Guideline::new(
    "🍠",
    "High Carb Approach",
    "Great for high-intensity training and glycogen replenishment. Time carbs around workouts for optimal performance. Focus on complex carbs and fiber.",
);
const MODERATE_CARB: Guideline = Guideline::new(
    "🍚",
    "Moderate Carbs",
    "Balanced approach allowing for performance and flexibility. Prioritize nutrient-dense sources like sweet potatoes, oats, and fruits.",
);
const LOWER_CARB: Guideline = Guideline::new(
    "🥬",
    "Lower Carb",
    "Good for fat loss and blood sugar control. Focus on fibrous vegetables and strategic timing around workouts.",
);
const VERY_LOW_CARB: Guideline = Guideline::new(
    "🥒",
    "Very Low Carb",
    "Ketogenic territory. Expect 1-2 week adaptation period. Excellent for appetite control and steady energy once adapted.",
);
const ZERO_CARB: Guideline = Guideline::new(
    "🥩",
    "Carnivore/Zero Carb",
    "Extreme approach. Ensure adequate fiber from other sources or consider digestive support. Monitor energy levels closely.",
);

// Combinations
const PROTEIN_FAT_DOMINANT: Guideline = Guideline::new(
    "⚡",
    "Protein + Fat Dominant",
    "Excellent for appetite control and muscle preservation. Perfect for fat loss phases. Consider nutrient timing around workouts.",
);
const PROTEIN_CARB_FOCUS: Guideline = Guideline::new(
    "🏋️",
    "Protein + Carb Focus",
    "Great for active individuals and muscle building. Time carbs pre/post workout for optimal performance and recovery.",
);
const FAT_ADAPTED: Guideline = Guideline::new(
    "🧠",
    "Fat-Adapted Protocol",
    "Excellent for mental clarity and stable energy. Allow 2-4 weeks for full adaptation. Consider exogenous ketones initially.",
);

// Meal timing
const MEAL_TIMING: Guideline = Guideline::new(
    "⏰",
    "Meal Timing",
    "Consider carb cycling or timing carbs around workouts for optimal body composition and performance.",
);
const NUTRIENT_PAIRING: Guideline = Guideline::new(
    "🍽️",
    "Nutrient Pairing",
    "Combine protein + fat OR protein + carbs in meals. Avoid high fat + high carb combinations for better body composition.",
);

// Practical tips
const BALANCED: Guideline = Guideline::new(
    "✅",
    "Balanced Approach",
    "This split offers flexibility and sustainability. Good starting point for most people. Easy to adjust based on results.",
);
const CUTTING: Guideline = Guideline::new(
    "🎯",
    "Cutting Protocol",
    "Excellent for fat loss while preserving muscle. Expect faster results but may need diet breaks every 8-12 weeks.",
);
const METABOLIC_FLEXIBILITY: Guideline = Guideline::new(
    "🔥",
    "Metabolic Flexibility",
    "This split promotes fat adaptation and ketosis. Great for appetite control and steady energy. Monitor electrolytes closely.",
);

fn protein_band(protein: f64) -> Guideline {
    if protein >= 40.0 {
        HIGH_PROTEIN
    } else if protein >= 30.0 {
        MODERATE_HIGH_PROTEIN
    } else if protein >= 20.0 {
        STANDARD_PROTEIN
    } else {
        LOW_PROTEIN
    }
}

fn fat_band(fat: f64) -> Guideline {
    if fat >= 50.0 {
        VERY_HIGH_FAT
    } else if fat >= 35.0 {
        HIGH_FAT
    } else if fat >= 25.0 {
        MODERATE_FAT
    } else if fat >= 15.0 {
        LOWER_FAT
    } else {
        VERY_LOW_FAT
    }
}

fn carb_band(carbs: f64) -> Guideline {
    if carbs >= 50.0 {
        HIGH_CARB
    } else if carbs >= 35.0 {
        MODERATE_CARB
    } else if carbs >= 20.0 {
        LOWER_CARB
    } else if carbs >= 10.0 {
        VERY_LOW_CARB
    } else {
        ZERO_CARB
    }
}

/// Within 5 points of 30/30 protein/fat and 10 points of 40 carbs.
pub fn is_balanced(protein: f64, fat: f64, carbs: f64) -> bool {
    (protein - 30.0).abs() <= 5.0 && (fat - 30.0).abs() <= 5.0 && (carbs - 40.0).abs() <= 10.0
}

/// Advice for a percentage split, in a fixed order.
pub fn guidelines(protein: f64, fat: f64, carbs: f64) -> Vec<Guideline> {
    let mut out = vec![protein_band(protein), fat_band(fat), carb_band(carbs)];

    let rules: [(bool, Guideline); 8] = [
        (protein >= 35.0 && fat >= 35.0, PROTEIN_FAT_DOMINANT),
        (protein >= 30.0 && carbs >= 40.0, PROTEIN_CARB_FOCUS),
        (fat >= 40.0 && carbs <= 20.0, FAT_ADAPTED),
        (carbs >= 30.0, MEAL_TIMING),
        (fat >= 30.0, NUTRIENT_PAIRING),
        (is_balanced(protein, fat, carbs), BALANCED),
        (protein >= 35.0 && carbs <= 25.0, CUTTING),
        (fat >= 40.0 && carbs <= 25.0, METABOLIC_FLEXIBILITY),
    ];

    out.extend(rules.into_iter().filter(|(fires, _)| *fires).map(|(_, g)| g));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headlines(list: &[Guideline]) -> Vec<&'static str> {
        list.iter().map(|g| g.headline).collect()
    }

    #[test]
    fn test_band_order_is_protein_fat_carb() {
        let list = guidelines(36.0, 25.0, 39.0);
        assert_eq!(
            headlines(&list),
            vec![
                "Moderate-High Protein",
                "Moderate Fat",
                "Moderate Carbs",
                "Meal Timing",
            ]
        );
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        assert_eq!(protein_band(40.0).headline, "High Protein Approach");
        assert_eq!(protein_band(19.9).headline, "Low Protein Warning");
        assert_eq!(fat_band(15.0).headline, "Lower Fat");
        assert_eq!(fat_band(14.9).headline, "Very Low Fat Warning");
        assert_eq!(carb_band(10.0).headline, "Very Low Carb");
        assert_eq!(carb_band(9.0).headline, "Carnivore/Zero Carb");
    }

    #[test]
    fn test_multiple_rules_fire_together() {
        // Keto-style high protein split
        let list = guidelines(40.0, 55.0, 5.0);
        assert_eq!(
            headlines(&list),
            vec![
                "High Protein Approach",
                "Very High Fat (Ketogenic-style)",
                "Carnivore/Zero Carb",
                "Protein + Fat Dominant",
                "Fat-Adapted Protocol",
                "Nutrient Pairing",
                "Cutting Protocol",
                "Metabolic Flexibility",
            ]
        );
    }

    #[test]
    fn test_balanced_split() {
        assert!(is_balanced(30.0, 30.0, 40.0));
        assert!(is_balanced(35.0, 25.0, 50.0));
        assert!(!is_balanced(36.0, 30.0, 40.0));

        let list = guidelines(30.0, 30.0, 40.0);
        assert!(headlines(&list).contains(&"Balanced Approach"));
        assert!(headlines(&list).contains(&"Protein + Carb Focus"));
    }

    #[test]
    fn test_plain_text_strips_symbol() {
        let g = guidelines(45.0, 25.0, 30.0)[0];
        assert_eq!(g.to_string().chars().next(), Some('🥩'));
        assert!(g.plain().starts_with("High Protein Approach: "));
        assert!(!g.plain().contains("**"));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(guidelines(33.0, 31.0, 36.0), guidelines(33.0, 31.0, 36.0));
    }
}
