//! Read-only supplement reference table.
//!
//! Built once on first use and never mutated. Lookups are case-insensitive
//! and return `None` for unknown names.

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::models::SupplementRecord;

pub use data::{COMMANDMENTS, SUPPLEMENTS, TRACKER_STEPS};

/// Category filter value that matches every record.
pub const ALL_CATEGORIES: &str = "All";

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(SUPPLEMENTS));

/// The process-wide catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug)]
pub struct Catalog {
    records: &'static [SupplementRecord],
    /// Index into `records`, keyed by lowercase name.
    by_key: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: &'static [SupplementRecord]) -> Self {
        let by_key = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.key(), i))
            .collect();
        Self { records, by_key }
    }

    pub fn get(&self, name: &str) -> Option<&'static SupplementRecord> {
        let records = self.records;
        self.by_key.get(&name.to_lowercase()).map(|&i| &records[i])
    }

    pub fn all(&self) -> &'static [SupplementRecord] {
        self.records
    }

    /// "All" followed by each category in first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut out = vec![ALL_CATEGORIES];
        for record in self.records {
            if !out.contains(&record.category) {
                out.push(record.category);
            }
        }
        out
    }

    /// Records whose name or description contains `search` and whose
    /// category equals `category` ("All" matches any).
    pub fn filter(&self, search: &str, category: &str) -> Vec<&'static SupplementRecord> {
        self.records
            .iter()
            .filter(|r| r.matches_search(search))
            .filter(|r| category == ALL_CATEGORIES || r.category == category)
            .collect()
    }

    /// Closest names to `input`, best first.
    pub fn fuzzy_matches(&self, input: &str) -> Vec<&'static SupplementRecord> {
        let needle = input.to_lowercase();
        let mut candidates: Vec<(&'static SupplementRecord, f64)> = self
            .records
            .iter()
            .map(|r| (r, jaro_winkler(&r.key(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.into_iter().map(|(r, _)| r).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
