use std::fmt;

use serde::Serialize;

/// When a supplement is best taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BestTiming {
    Morning,
    PreWorkout,
    Evening,
    Anytime,
}

impl BestTiming {
    /// The stack slot a supplement lands in when added from a recommendation.
    ///
    /// "Anytime" supplements go into the morning slot.
    pub fn slot(&self) -> TimeSlot {
        match self {
            BestTiming::Morning | BestTiming::Anytime => TimeSlot::Morning,
            BestTiming::PreWorkout => TimeSlot::PreWorkout,
            BestTiming::Evening => TimeSlot::Evening,
        }
    }
}

impl fmt::Display for BestTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BestTiming::Morning => "morning",
            BestTiming::PreWorkout => "pre-workout",
            BestTiming::Evening => "evening",
            BestTiming::Anytime => "anytime",
        };
        f.write_str(label)
    }
}

/// One of the three time-of-day groups in a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSlot {
    Morning,
    PreWorkout,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::PreWorkout, TimeSlot::Evening];

    pub fn title(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::PreWorkout => "Pre-Workout",
            TimeSlot::Evening => "Evening",
        }
    }
}

/// A static reference entry in the supplement catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementRecord {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub dosage: &'static str,
    pub timing: &'static str,
    pub warnings: &'static [&'static str],
    /// Names of supplements this one is commonly combined with. Not all of
    /// them are catalog entries.
    pub stacks_with: &'static [&'static str],
    pub color: &'static str,
    pub best_timing: BestTiming,
}

impl SupplementRecord {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.description.to_lowercase().contains(&term)
    }
}
