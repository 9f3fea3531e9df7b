use crate::catalog::Catalog;
use crate::models::{ScenarioRecommendation, SupplementRecord, TimeSlot};

/// One supplement placed in a time slot, with the dose the user chose.
#[derive(Debug, Clone, PartialEq)]
pub struct StackItem {
    pub supplement: &'static SupplementRecord,
    pub dosage: String,
}

/// A user's supplement selection, grouped by time of day.
///
/// The same supplement may appear more than once, in one slot or several.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    morning: Vec<StackItem>,
    pre_workout: Vec<StackItem>,
    evening: Vec<StackItem>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: TimeSlot) -> &[StackItem] {
        match slot {
            TimeSlot::Morning => &self.morning,
            TimeSlot::PreWorkout => &self.pre_workout,
            TimeSlot::Evening => &self.evening,
        }
    }

    fn slot_mut(&mut self, slot: TimeSlot) -> &mut Vec<StackItem> {
        match slot {
            TimeSlot::Morning => &mut self.morning,
            TimeSlot::PreWorkout => &mut self.pre_workout,
            TimeSlot::Evening => &mut self.evening,
        }
    }

    /// Append with the supplement's default dosage.
    pub fn add(&mut self, supplement: &'static SupplementRecord, slot: TimeSlot) {
        self.add_with_dosage(supplement, slot, supplement.dosage.to_string());
    }

    pub fn add_with_dosage(
        &mut self,
        supplement: &'static SupplementRecord,
        slot: TimeSlot,
        dosage: String,
    ) {
        self.slot_mut(slot).push(StackItem { supplement, dosage });
    }

    /// Remove every entry named `name` (case-insensitive) from `slot` only.
    /// Returns how many entries were removed.
    pub fn remove(&mut self, name: &str, slot: TimeSlot) -> usize {
        let items = self.slot_mut(slot);
        let before = items.len();
        items.retain(|item| !item.supplement.name.eq_ignore_ascii_case(name));
        before - items.len()
    }

    pub fn clear(&mut self) {
        self.morning.clear();
        self.pre_workout.clear();
        self.evening.clear();
    }

    /// Add each resolvable supplement of a recommendation to the slot its
    /// own timing calls for. Unknown names are skipped. Returns the number added.
    pub fn add_recommendation(
        &mut self,
        recommendation: &ScenarioRecommendation,
        catalog: &Catalog,
    ) -> usize {
        let mut added = 0;
        for name in recommendation.supplements {
            if let Some(supplement) = catalog.get(name) {
                self.add(supplement, supplement.best_timing.slot());
                added += 1;
            }
        }
        added
    }

    pub fn total_items(&self) -> usize {
        self.morning.len() + self.pre_workout.len() + self.evening.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::recommend::match_scenario;

    fn record(name: &str) -> &'static SupplementRecord {
        catalog().get(name).unwrap()
    }

    fn names(stack: &Stack, slot: TimeSlot) -> Vec<&'static str> {
        stack.slot(slot).iter().map(|i| i.supplement.name).collect()
    }

    #[test]
    fn test_add_uses_default_dosage() {
        let mut stack = Stack::new();
        stack.add(record("CAFFEINE"), TimeSlot::Morning);
        assert_eq!(stack.slot(TimeSlot::Morning)[0].dosage, "100-200mg daily");
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut stack = Stack::new();
        stack.add(record("ZINC"), TimeSlot::Evening);
        stack.add(record("ZINC"), TimeSlot::Evening);
        stack.add(record("ZINC"), TimeSlot::Morning);
        assert_eq!(stack.total_items(), 3);
    }

    #[test]
    fn test_remove_only_touches_one_slot() {
        let mut stack = Stack::new();
        stack.add(record("ZINC"), TimeSlot::Evening);
        stack.add(record("ZINC"), TimeSlot::Morning);

        assert_eq!(stack.remove("ZINC", TimeSlot::Evening), 1);
        assert!(stack.slot(TimeSlot::Evening).is_empty());
        assert_eq!(names(&stack, TimeSlot::Morning), vec!["ZINC"]);
    }

    #[test]
    fn test_add_then_remove_restores_slot() {
        let mut stack = Stack::new();
        stack.add(record("CAFFEINE"), TimeSlot::Morning);
        stack.add(record("Choline"), TimeSlot::Morning);
        let before = stack.clone();

        stack.add(record("PQQ"), TimeSlot::Morning);
        stack.remove("PQQ", TimeSlot::Morning);

        assert_eq!(stack, before);
        assert_eq!(names(&stack, TimeSlot::Morning), vec!["CAFFEINE", "Choline"]);
    }

    #[test]
    fn test_remove_ignores_case() {
        let mut stack = Stack::new();
        stack.add(record("L-THEANINE"), TimeSlot::Evening);
        assert_eq!(stack.remove("l-theanine", TimeSlot::Evening), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::new();
        stack.add(record("TAURINE"), TimeSlot::PreWorkout);
        stack.add(record("ZINC"), TimeSlot::Evening);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_recommendation_uses_best_timing() {
        let mut stack = Stack::new();
        let rec = match_scenario("more focus");
        let added = stack.add_recommendation(&rec, catalog());

        assert_eq!(added, 4);
        // ALPHA GPC, CAFFEINE are morning; Choline is anytime; L-THEANINE is evening
        assert_eq!(names(&stack, TimeSlot::Morning), vec!["ALPHA GPC", "CAFFEINE", "Choline"]);
        assert_eq!(names(&stack, TimeSlot::Evening), vec!["L-THEANINE"]);
        assert!(stack.slot(TimeSlot::PreWorkout).is_empty());
    }

    #[test]
    fn test_recommendation_skips_unknown_names() {
        let rec = ScenarioRecommendation {
            title: "Test",
            description: "",
            supplements: &["Unobtainium", "TAURINE"],
            reasoning: "",
            color: "#000000",
        };
        let mut stack = Stack::new();
        assert_eq!(stack.add_recommendation(&rec, catalog()), 1);
        assert_eq!(names(&stack, TimeSlot::PreWorkout), vec!["TAURINE"]);
    }
}
