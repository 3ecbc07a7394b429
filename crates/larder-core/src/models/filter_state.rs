use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::recipe::{Cuisine, DietaryTag};

/// Minimum match-percentage facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityFilter {
    #[default]
    All,
    /// 100% of ingredients on hand.
    CanMakeNow,
    /// At least 80% on hand.
    AlmostReady,
    /// At least 50% on hand.
    NeedShopping,
}

impl AvailabilityFilter {
    /// Minimum match percentage required, or None for All.
    pub fn min_percentage(self) -> Option<f32> {
        match self {
            AvailabilityFilter::All => None,
            AvailabilityFilter::CanMakeNow => Some(100.0),
            AvailabilityFilter::AlmostReady => Some(80.0),
            AvailabilityFilter::NeedShopping => Some(50.0),
        }
    }
}

/// Cooking-time facet, proxied by step count (<=5 quick, 6-10 medium, >10 long).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFilter {
    #[default]
    Any,
    Quick,
    Medium,
    Long,
}

impl TimeFilter {
    pub fn accepts(self, step_count: usize) -> bool {
        match self {
            TimeFilter::Any => true,
            TimeFilter::Quick => step_count <= 5,
            TimeFilter::Medium => step_count > 5 && step_count <= 10,
            TimeFilter::Long => step_count > 10,
        }
    }
}

/// Difficulty facet, same step-count proxy with tighter thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyFilter {
    #[default]
    Any,
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyFilter {
    pub fn accepts(self, step_count: usize) -> bool {
        match self {
            DifficultyFilter::Any => true,
            DifficultyFilter::Beginner => step_count <= 5,
            DifficultyFilter::Intermediate => step_count > 5 && step_count <= 8,
            DifficultyFilter::Advanced => step_count > 8,
        }
    }
}

/// The persisted multi-facet filter state. Process-wide, load-at-startup /
/// save-on-change; survives restarts via the settings store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub availability: AvailabilityFilter,
    pub cuisines: BTreeSet<Cuisine>,
    pub dietary: BTreeSet<DietaryTag>,
    pub time: TimeFilter,
    pub difficulty: DifficultyFilter,
    /// Lowercased ingredient terms that disqualify a recipe outright.
    pub avoid_ingredients: BTreeSet<String>,
    /// Stored and exposed but intentionally has no effect on ordering.
    pub expiring_first: bool,
}

impl FilterState {
    pub fn has_active_filters(&self) -> bool {
        self.availability != AvailabilityFilter::All
            || !self.cuisines.is_empty()
            || !self.dietary.is_empty()
            || self.time != TimeFilter::Any
            || self.difficulty != DifficultyFilter::Any
            || self.expiring_first
            || !self.avoid_ingredients.is_empty()
    }

    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if self.availability != AvailabilityFilter::All {
            count += 1;
        }
        count += self.cuisines.len();
        count += self.dietary.len();
        if self.time != TimeFilter::Any {
            count += 1;
        }
        if self.difficulty != DifficultyFilter::Any {
            count += 1;
        }
        if self.expiring_first {
            count += 1;
        }
        count += self.avoid_ingredients.len();
        count
    }
}
