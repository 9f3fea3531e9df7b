use serde::Serialize;
use tracing::{debug, info};

use crate::calculator::{bmi, body_composition, guidelines, macros_for, validate_input, Guideline};
use crate::catalog::{catalog, Catalog};
use crate::error::{RecompError, Result};
use crate::models::{
    BodyCompositionInput, BodyCompositionResult, MacroInput, MacroResult, ScenarioRecommendation,
    SupplementRecord, TimeSlot,
};
use crate::recommend::analyze_scenario;
use crate::state::gate::AccessGate;
use crate::state::stack::Stack;

/// Everything derived from one input snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub composition: BodyCompositionResult,
    /// Present when a calorie target is set.
    pub macros: Option<MacroResult>,
    /// Present when a height is set.
    pub bmi: Option<f64>,
}

impl Projection {
    /// Compute from a snapshot that already passed validation.
    pub fn compute(input: &BodyCompositionInput) -> Self {
        let composition = body_composition(input);

        let macros = input.calorie_target().map(|total_calories| {
            macros_for(&MacroInput {
                current_weight: input.weight,
                goal_weight: composition.goal_weight,
                total_calories,
                split: input.split,
            })
        });

        let height = input.total_height_inches();
        let bmi = (height > 0.0).then(|| bmi(input.weight, height));

        Self {
            composition,
            macros,
            bmi,
        }
    }

    /// Advice for the split the formula actually produced.
    pub fn realized_guidelines(&self) -> Vec<Guideline> {
        self.macros
            .map(|m| {
                let split = m.realized_split();
                guidelines(split.protein, split.fat, split.carbs)
            })
            .unwrap_or_default()
    }
}

/// One user's in-memory session: the current input snapshot, its derived
/// projection, the supplement gate and the stack.
#[derive(Debug)]
pub struct Session {
    input: BodyCompositionInput,
    projection: Option<Projection>,
    /// Why the current snapshot produced no projection.
    invalid_reason: Option<String>,
    gate: AccessGate,
    stack: Stack,
    recommendation: Option<ScenarioRecommendation>,
    catalog: &'static Catalog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BodyCompositionInput::default())
    }
}

impl Session {
    pub fn new(input: BodyCompositionInput) -> Self {
        let mut session = Self {
            input: BodyCompositionInput::default(),
            projection: None,
            invalid_reason: None,
            gate: AccessGate::default(),
            stack: Stack::new(),
            recommendation: None,
            catalog: catalog(),
        };
        session.set_input(input);
        session
    }

    /// Replace the snapshot and recompute everything derived from it.
    /// Invalid input leaves no projection at all.
    pub fn set_input(&mut self, input: BodyCompositionInput) {
        self.input = input;
        match validate_input(&self.input) {
            Ok(()) => {
                self.projection = Some(Projection::compute(&self.input));
                self.invalid_reason = None;
            }
            Err(e) => {
                debug!(reason = %e, "input invalid, clearing results");
                self.projection = None;
                self.invalid_reason = Some(e.to_string());
            }
        }
    }

    /// Apply a change to a copy of the snapshot, then recompute.
    pub fn update(&mut self, change: impl FnOnce(&mut BodyCompositionInput)) {
        let mut next = self.input.clone();
        change(&mut next);
        self.set_input(next);
    }

    pub fn input(&self) -> &BodyCompositionInput {
        &self.input
    }

    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.projection.is_some()
    }

    pub fn invalid_reason(&self) -> Option<&str> {
        self.invalid_reason.as_deref()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Supplement tools (gated)
    // ─────────────────────────────────────────────────────────────────────

    pub fn acknowledge_guidelines(&mut self) {
        if !self.gate.is_unlocked() {
            info!("supplement guidelines acknowledged");
        }
        self.gate.acknowledge();
    }

    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn browse(&self, search: &str, category: &str) -> Result<Vec<&'static SupplementRecord>> {
        self.gate.ensure_unlocked()?;
        Ok(self.catalog.filter(search, category))
    }

    pub fn all_supplements(&self) -> Result<&'static [SupplementRecord]> {
        self.gate.ensure_unlocked()?;
        Ok(self.catalog.all())
    }

    /// Exact name first, then the closest fuzzy match.
    pub fn lookup(&self, name: &str) -> Result<&'static SupplementRecord> {
        self.gate.ensure_unlocked()?;
        self.catalog
            .get(name)
            .or_else(|| self.catalog.fuzzy_matches(name).into_iter().next())
            .ok_or_else(|| RecompError::SupplementNotFound(name.to_string()))
    }

    pub fn add_to_stack(&mut self, name: &str, slot: TimeSlot) -> Result<()> {
        self.gate.ensure_unlocked()?;
        let supplement = self
            .catalog
            .get(name)
            .ok_or_else(|| RecompError::SupplementNotFound(name.to_string()))?;
        self.stack.add(supplement, slot);
        Ok(())
    }

    /// Remove `name` from one slot. Names resolve through the catalog the
    /// same way `add_to_stack` does.
    pub fn remove_from_stack(&mut self, name: &str, slot: TimeSlot) -> Result<usize> {
        self.gate.ensure_unlocked()?;
        let name = self.catalog.get(name).map_or(name, |record| record.name);
        Ok(self.stack.remove(name, slot))
    }

    pub fn clear_stack(&mut self) -> Result<()> {
        self.gate.ensure_unlocked()?;
        self.stack.clear();
        Ok(())
    }

    /// Analyze a goal description. A new analysis replaces the previous
    /// recommendation; nothing is queued.
    pub fn analyze(&mut self, text: &str) -> Result<&ScenarioRecommendation> {
        self.gate.ensure_unlocked()?;
        let recommendation = analyze_scenario(text)?;
        Ok(&*self.recommendation.insert(recommendation))
    }

    pub fn recommendation(&self) -> Option<&ScenarioRecommendation> {
        self.recommendation.as_ref()
    }

    /// Merge the current recommendation into the stack. Returns the number
    /// of supplements added.
    pub fn add_recommendation_to_stack(&mut self) -> Result<usize> {
        self.gate.ensure_unlocked()?;
        let recommendation = self.recommendation.as_ref().ok_or_else(|| {
            RecompError::InvalidInput("No recommendation to add; analyze a goal first".to_string())
        })?;
        Ok(self.stack.add_recommendation(recommendation, self.catalog))
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> BodyCompositionInput {
        BodyCompositionInput {
            weight: 200.0,
            body_fat: 25.0,
            height_feet: 5.0,
            height_inches: 10.0,
            age: 30,
            daily_calories: Some(2000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_session_is_invalid() {
        let session = Session::default();
        assert!(!session.is_valid());
        assert!(session.invalid_reason().is_some());
    }

    #[test]
    fn test_projection_recomputed_on_update() {
        let mut session = Session::new(valid_input());
        let first = *session.projection().unwrap();
        assert!(first.macros.is_some());
        assert!(first.bmi.is_some());

        session.update(|input| input.desired_body_fat = 20.0);
        let second = *session.projection().unwrap();
        assert!(second.composition.goal_weight > first.composition.goal_weight);
    }

    #[test]
    fn test_invalid_update_clears_everything() {
        let mut session = Session::new(valid_input());
        session.update(|input| input.body_fat = 100.0);
        assert!(session.projection().is_none());

        session.update(|input| input.body_fat = 25.0);
        assert!(session.is_valid());
    }

    #[test]
    fn test_macros_absent_without_calories() {
        let session = Session::new(BodyCompositionInput {
            daily_calories: None,
            ..valid_input()
        });
        let projection = session.projection().unwrap();
        assert!(projection.macros.is_none());
        assert!(projection.realized_guidelines().is_empty());
    }

    #[test]
    fn test_locked_session_refuses_supplement_tools() {
        let mut session = Session::default();
        assert!(matches!(session.browse("", "All"), Err(RecompError::Locked)));
        assert!(matches!(session.lookup("ZINC"), Err(RecompError::Locked)));
        assert!(matches!(session.all_supplements(), Err(RecompError::Locked)));
        assert!(matches!(session.add_to_stack("ZINC", TimeSlot::Evening), Err(RecompError::Locked)));
        assert!(matches!(session.analyze("focus"), Err(RecompError::Locked)));
        assert!(matches!(session.clear_stack(), Err(RecompError::Locked)));
    }

    #[test]
    fn test_unlocked_flow() {
        let mut session = Session::default();
        session.acknowledge_guidelines();

        session.add_to_stack("zinc", TimeSlot::Evening).unwrap();
        assert!(matches!(
            session.add_to_stack("Unobtainium", TimeSlot::Evening),
            Err(RecompError::SupplementNotFound(_))
        ));

        assert!(session.add_recommendation_to_stack().is_err());
        assert_eq!(session.lookup("zinc").unwrap().name, "ZINC");
        assert_eq!(session.all_supplements().unwrap().len(), 29);

        let title = session.analyze("I need better sleep").unwrap().title;
        assert_eq!(title, "Stress & Recovery Stack");
        assert_eq!(session.add_recommendation_to_stack().unwrap(), 4);
        assert_eq!(session.stack().total_items(), 5);

        // Newer analysis replaces the old one
        session.analyze("heart health").unwrap();
        assert_eq!(
            session.recommendation().map(|r| r.title),
            Some("Cardiovascular & Longevity Stack")
        );

        session.clear_stack().unwrap();
        assert!(session.stack().is_empty());
    }

    #[test]
    fn test_add_then_remove_by_any_case_restores_slot() {
        let mut session = Session::default();
        session.acknowledge_guidelines();
        session.add_to_stack("ZINC", TimeSlot::Morning).unwrap();

        session.add_to_stack("zinc", TimeSlot::Evening).unwrap();
        assert_eq!(session.remove_from_stack("zinc", TimeSlot::Evening).unwrap(), 1);

        assert!(session.stack().slot(TimeSlot::Evening).is_empty());
        assert_eq!(session.stack().slot(TimeSlot::Morning).len(), 1);
        assert_eq!(session.remove_from_stack("Unobtainium", TimeSlot::Morning).unwrap(), 0);
    }
}
