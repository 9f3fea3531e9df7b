use chrono::NaiveDate;
use serde::Serialize;

use crate::calculator::{guidelines, protein_sources, PROTEIN_HACK_LINES};
use crate::export::pages::{paginate, render_pages, Block, PAGE_LINES, WRAP_WIDTH};
use crate::models::BodyCompositionInput;
use crate::state::Projection;

pub const REPORT_TITLE: &str = "Complete Body Composition & Nutrition Analysis";

pub const DISCLAIMER: &str = "This analysis is for informational purposes only. Consult a healthcare professional for personalized advice.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub bullets: Vec<String>,
}

impl Section {
    fn new(title: &'static str, bullets: Vec<String>) -> Self {
        Self { title, bullets }
    }
}

/// The analysis document, before layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub generated_on: String,
    pub sections: Vec<Section>,
    pub disclaimer: &'static str,
}

impl Report {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Body blocks in document order. The disclaimer is kept apart so the
    /// layout can pin it to the last page.
    pub fn blocks(&self) -> Vec<Block> {
        let mut blocks = vec![
            Block::Centered(self.title.to_string()),
            Block::Centered(format!("Generated on {}", self.generated_on)),
        ];
        for section in &self.sections {
            blocks.push(Block::Spacer);
            blocks.push(Block::Heading(section.title.to_string()));
            blocks.extend(section.bullets.iter().cloned().map(Block::Bullet));
        }
        blocks
    }

    pub fn pages(&self) -> Vec<Vec<String>> {
        paginate(
            &self.blocks(),
            Some(&Block::Centered(self.disclaimer.to_string())),
            PAGE_LINES,
            WRAP_WIDTH,
        )
    }

    /// Paginated plain text.
    pub fn render(&self) -> String {
        render_pages(&self.pages())
    }
}

/// Assemble the report for a valid snapshot and its projection.
///
/// Numbers the user typed are echoed as entered; derived masses use one
/// decimal. The nutrition plan and protein guide appear only with macros.
/// Guidelines follow the configured split, not the realized one.
pub fn build_report(input: &BodyCompositionInput, projection: &Projection, date: NaiveDate) -> Report {
    let r = &projection.composition;
    let mut sections = Vec::new();

    sections.push(Section::new(
        "Current Body Composition",
        vec![
            format!("Weight: {} lbs", input.weight),
            format!("Body Fat: {}%", input.body_fat),
            format!("Lean Body Mass: {:.1} lbs", r.current_lean_mass),
            format!("Fat Mass: {:.1} lbs", r.current_fat_mass),
        ],
    ));

    sections.push(Section::new(
        "Target Goals",
        vec![
            format!("Goal Weight: {:.1} lbs", r.goal_weight),
            format!("Target Body Fat: {}%", input.desired_body_fat),
            format!(
                "Goal Lean Mass: {:.1} lbs ({}% of current)",
                r.goal_lean_mass, input.desired_lean_mass_pct
            ),
            format!("Goal Fat Mass: {:.1} lbs", r.goal_fat_mass),
        ],
    ));

    sections.push(Section::new(
        "Timeline & Progress",
        vec![
            format!("Weight to Lose: {:.1} lbs", r.weight_to_lose),
            format!("Weekly Weight Loss Rate: {} lbs/week", input.weekly_weight_loss),
            format!(
                "Estimated Timeline: {} weeks ({} months)",
                r.weeks_to_goal,
                r.months_to_goal()
            ),
            format!("Fat Loss: {:.1} lbs", r.fat_to_lose()),
        ],
    ));

    if let (Some(m), Some(calories)) = (projection.macros, input.calorie_target()) {
        let split = input.split;
        sections.push(Section::new(
            "Custom Nutrition Plan",
            vec![
                format!("Daily Calories: {}", calories),
                format!(
                    "Custom Macro Split: {}% Protein / {}% Fat / {}% Carbs",
                    split.protein, split.fat, split.carbs
                ),
                format!(
                    "Protein: {}g ({}% - {} calories)",
                    m.protein, m.protein_percentage, m.protein_calories
                ),
                format!(
                    "Carbohydrates: {}g ({}% - {} calories)",
                    m.carbs, m.carb_percentage, m.carb_calories
                ),
                format!("Fat: {}g ({}% - {} calories)", m.fat, m.fat_percentage, m.fat_calories),
            ],
        ));

        let mut guide: Vec<String> = PROTEIN_HACK_LINES.iter().map(|l| l.to_string()).collect();
        guide.extend(protein_sources(m.protein as f64).into_iter().map(|s| {
            format!("For {}g daily: {} {} ({})", m.protein, s.amount, s.name, s.protein)
        }));
        sections.push(Section::new("Protein Source Guide (2-6-8-10 Hack)", guide));
    }

    let split = input.split;
    if split.protein > 0.0 && split.fat > 0.0 && split.carbs > 0.0 {
        sections.push(Section::new(
            "Intelligent Guidelines for Your Macro Split",
            guidelines(split.protein, split.fat, split.carbs)
                .iter()
                .map(|g| g.plain())
                .collect(),
        ));
    }

    sections.push(Section::new(
        "Key Insights & Recommendations",
        vec![
            format!(
                "You will maintain {:.1} lbs of lean body mass while losing fat",
                r.goal_lean_mass
            ),
            format!(
                "Your body fat percentage will decrease from {}% to {}%",
                input.body_fat, input.desired_body_fat
            ),
            format!(
                "Total fat loss of {:.1} lbs while preserving muscle",
                r.fat_to_lose()
            ),
            format!(
                "At {} lbs/week, you'll reach your goal in approximately {} months",
                input.weekly_weight_loss,
                r.months_to_goal()
            ),
            "Focus on strength training to maintain lean body mass during weight loss".to_string(),
            "Monitor progress weekly and adjust caloric intake as needed".to_string(),
            "Use the 2-6-8-10 protein hack for easy meal planning".to_string(),
            "Consider periodic diet breaks if timeline extends beyond 12-16 weeks".to_string(),
        ],
    ));

    Report {
        title: REPORT_TITLE,
        generated_on: date.format("%B %-d, %Y").to_string(),
        sections,
        disclaimer: DISCLAIMER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroSplit;

    fn input(calories: Option<f64>) -> BodyCompositionInput {
        BodyCompositionInput {
            weight: 200.0,
            body_fat: 25.0,
            daily_calories: calories,
            ..Default::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn titles(report: &Report) -> Vec<&str> {
        report.sections.iter().map(|s| s.title).collect()
    }

    #[test]
    fn test_section_order_with_macros() {
        let input = input(Some(2000.0));
        let report = build_report(&input, &Projection::compute(&input), date());

        assert_eq!(report.generated_on, "March 5, 2024");
        assert_eq!(
            titles(&report),
            vec![
                "Current Body Composition",
                "Target Goals",
                "Timeline & Progress",
                "Custom Nutrition Plan",
                "Protein Source Guide (2-6-8-10 Hack)",
                "Intelligent Guidelines for Your Macro Split",
                "Key Insights & Recommendations",
            ]
        );
    }

    #[test]
    fn test_nutrition_sections_need_calories() {
        let input = input(None);
        let report = build_report(&input, &Projection::compute(&input), date());
        assert!(report.section("Custom Nutrition Plan").is_none());
        assert!(report.section("Protein Source Guide (2-6-8-10 Hack)").is_none());
        assert!(report.section("Key Insights & Recommendations").is_some());
    }

    #[test]
    fn test_values_formatted() {
        let input = input(Some(2000.0));
        let report = build_report(&input, &Projection::compute(&input), date());

        let current = report.section("Current Body Composition").unwrap();
        assert_eq!(current.bullets[0], "Weight: 200 lbs");
        assert_eq!(current.bullets[2], "Lean Body Mass: 150.0 lbs");

        let goals = report.section("Target Goals").unwrap();
        assert_eq!(goals.bullets[0], "Goal Weight: 176.5 lbs");
        assert_eq!(goals.bullets[2], "Goal Lean Mass: 150.0 lbs (100% of current)");

        let timeline = report.section("Timeline & Progress").unwrap();
        assert_eq!(timeline.bullets[2], "Estimated Timeline: 24 weeks (6 months)");
        assert_eq!(timeline.bullets[3], "Fat Loss: 23.5 lbs");

        let plan = report.section("Custom Nutrition Plan").unwrap();
        assert_eq!(plan.bullets[1], "Custom Macro Split: 30% Protein / 25% Fat / 45% Carbs");
    }

    #[test]
    fn test_guidelines_follow_configured_split() {
        let input = BodyCompositionInput {
            split: MacroSplit {
                protein: 40.0,
                fat: 40.0,
                carbs: 20.0,
            },
            ..input(Some(2000.0))
        };
        let report = build_report(&input, &Projection::compute(&input), date());
        let advice = report.section("Intelligent Guidelines for Your Macro Split").unwrap();

        assert!(advice.bullets[0].starts_with("High Protein Approach: "));
        assert!(advice.bullets.iter().all(|b| !b.contains("**")));
    }

    #[test]
    fn test_render_has_title_and_disclaimer() {
        let input = input(Some(2000.0));
        let text = build_report(&input, &Projection::compute(&input), date()).render();

        assert!(text.contains(REPORT_TITLE));
        assert!(text.contains("• Use the 2-6-8-10 protein hack for easy meal planning"));
        assert!(text.trim_end().ends_with("personalized advice."));
    }
}
