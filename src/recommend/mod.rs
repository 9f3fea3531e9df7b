mod scenarios;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{RecompError, Result};
use crate::models::{ScenarioRecommendation, SupplementRecord};

pub use scenarios::{ScenarioRule, DEFAULT_RECOMMENDATION, SCENARIO_RULES};

/// First rule with any keyword contained in the lowercased text, else the
/// general-health default. Rules are tried strictly in order.
pub fn match_scenario(text: &str) -> ScenarioRecommendation {
    let lowered = text.to_lowercase();

    let chosen = SCENARIO_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| &rule.recommendation)
        .unwrap_or(&DEFAULT_RECOMMENDATION);

    debug!(title = chosen.title, "matched scenario");
    chosen.clone()
}

/// Recommendation for a user-entered goal. Blank text is rejected rather
/// than silently mapped to the default stack.
pub fn analyze_scenario(text: &str) -> Result<ScenarioRecommendation> {
    if text.trim().is_empty() {
        return Err(RecompError::InvalidInput(
            "Describe your goal before requesting a recommendation".to_string(),
        ));
    }
    Ok(match_scenario(text))
}

/// Catalog records for a recommendation, skipping names the catalog lacks.
pub fn resolve<'c>(
    recommendation: &ScenarioRecommendation,
    catalog: &'c Catalog,
) -> Vec<&'c SupplementRecord> {
    recommendation
        .supplements
        .iter()
        .filter_map(|name| catalog.get(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn test_first_match_wins() {
        // "focus" (cognitive) beats "workout" (performance)
        let rec = match_scenario("Better FOCUS during my workout");
        assert_eq!(rec.title, "Cognitive Enhancement Stack");
    }

    #[test]
    fn test_multi_word_keywords() {
        assert_eq!(match_scenario("want to improve my blood pressure").title, "Cardiovascular & Longevity Stack");
        assert_eq!(match_scenario("weight loss please").title, "Fat Loss & Metabolism Stack");
    }

    #[test]
    fn test_energy_levels_hits_performance_first() {
        // "energy" is a performance keyword and performance is checked before hormonal
        assert_eq!(match_scenario("low energy levels").title, "Performance & Energy Stack");
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(match_scenario("just curious").title, DEFAULT_RECOMMENDATION.title);
    }

    #[test]
    fn test_blank_text_is_rejected() {
        assert!(matches!(analyze_scenario("   "), Err(RecompError::InvalidInput(_))));
        assert!(analyze_scenario("sleep").is_ok());
    }

    #[test]
    fn test_every_recommended_name_resolves() {
        let catalog = catalog();
        for rec in SCENARIO_RULES
            .iter()
            .map(|r| &r.recommendation)
            .chain(std::iter::once(&DEFAULT_RECOMMENDATION))
        {
            assert_eq!(resolve(rec, catalog).len(), rec.supplements.len(), "{}", rec.title);
        }
    }
}
