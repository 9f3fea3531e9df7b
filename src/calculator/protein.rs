//! The "2-6-8-10" protein source guide: 2 scoops of whey, 6 oz chicken,
//! 8 oz steak or 10 oz tuna each give about 50 g of protein.

use serde::Serialize;

/// Protein grams per reference serving.
pub const REFERENCE_PROTEIN_G: f64 = 50.0;

/// Protein grams per scoop of whey.
pub const WHEY_SCOOP_PROTEIN_G: f64 = 25.0;

/// Fixed reference lines shown in the exported report.
pub const PROTEIN_HACK_LINES: [&str; 4] = [
    "2x Whey Protein Scoops = 50g protein",
    "6oz Chicken Breast = 50g protein",
    "8oz Lean Steak = 50g protein",
    "10oz Tuna = 50g protein",
];

/// How much of one food covers a daily protein target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProteinSource {
    pub name: &'static str,
    pub amount: String,
    pub protein: &'static str,
}

/// Serving sizes of each reference food that cover `protein_target` grams.
pub fn protein_sources(protein_target: f64) -> Vec<ProteinSource> {
    let ounces = |per_50g: f64| (protein_target / REFERENCE_PROTEIN_G * per_50g).round() as i64;

    vec![
        ProteinSource {
            name: "Whey Protein",
            amount: format!("{}x scoops", (protein_target / WHEY_SCOOP_PROTEIN_G).round() as i64),
            protein: "25g per scoop",
        },
        ProteinSource {
            name: "Chicken Breast",
            amount: format!("{}oz", ounces(6.0)),
            protein: "50g per 6oz",
        },
        ProteinSource {
            name: "Lean Steak",
            amount: format!("{}oz", ounces(8.0)),
            protein: "50g per 8oz",
        },
        ProteinSource {
            name: "Tuna",
            amount: format!("{}oz", ounces(10.0)),
            protein: "50g per 10oz",
        },
    ]
}
