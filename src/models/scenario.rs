use serde::Serialize;

/// A supplement stack suggested for a free-text goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioRecommendation {
    pub title: &'static str,
    pub description: &'static str,
    /// Catalog names, in display order. Names missing from the catalog are
    /// skipped by consumers.
    pub supplements: &'static [&'static str],
    pub reasoning: &'static str,
    pub color: &'static str,
}
