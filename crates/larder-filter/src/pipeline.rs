//! FilterPipeline — snapshot-per-evaluation conjunction over enriched
//! recipes.

use std::sync::{Arc, Mutex};

use larder_core::errors::LarderResult;
use larder_core::models::{EnrichedRecipe, FilterState};
use larder_core::traits::ISettingsStore;
use larder_enrich::cuisine::matches_cuisine;
use larder_match::match_percentage;

use crate::state::FilterStore;

/// Holds the live filter state behind a mutex. Mutations persist
/// immediately; each evaluation works from a snapshot so a concurrent
/// update can never produce a half-old, half-new conjunction.
pub struct FilterPipeline {
    store: FilterStore,
    state: Mutex<FilterState>,
}

impl FilterPipeline {
    /// Load the persisted state and build the pipeline around it.
    pub fn new(settings: Arc<dyn ISettingsStore>) -> LarderResult<Self> {
        let store = FilterStore::new(settings);
        let state = store.load()?;
        Ok(Self {
            store,
            state: Mutex::new(state),
        })
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> FilterState {
        self.lock_state().clone()
    }

    /// Mutate the state and persist the result before returning it.
    pub fn update(&self, mutate: impl FnOnce(&mut FilterState)) -> LarderResult<FilterState> {
        let mut guard = self.lock_state();
        mutate(&mut guard);
        self.store.save(&guard)?;
        Ok(guard.clone())
    }

    /// Reset every facet to its default and persist.
    pub fn clear(&self) -> LarderResult<FilterState> {
        self.update(|state| *state = FilterState::default())
    }

    /// Filter recipes against the current state and pantry. Input order
    /// is preserved; `expiring_first` deliberately has no ordering effect.
    pub fn apply(&self, recipes: &[EnrichedRecipe], pantry: &[String]) -> Vec<EnrichedRecipe> {
        let state = self.current();
        recipes
            .iter()
            .filter(|recipe| accepts(&state, recipe, pantry))
            .cloned()
            .collect()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, FilterState> {
        // A poisoned lock still holds valid state; filter facets are
        // plain data with no invariants to restore.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Short-circuit conjunction of every active facet.
pub fn accepts(state: &FilterState, recipe: &EnrichedRecipe, pantry: &[String]) -> bool {
    if let Some(min) = state.availability.min_percentage() {
        if match_percentage(&recipe.record.ingredients, pantry) < min {
            return false;
        }
    }

    if !state.cuisines.is_empty() {
        // Keyword rules per selected cuisine, not the single inferred
        // facet: a pasta stir fry passes an Asian-only filter even though
        // its inferred cuisine is Italian.
        let name = recipe.record.name.to_lowercase();
        let ingredient_text = recipe.record.ingredient_text();
        if !state
            .cuisines
            .iter()
            .any(|&cuisine| matches_cuisine(&name, &ingredient_text, cuisine))
        {
            return false;
        }
    }

    if !state.dietary.is_empty()
        && !state.dietary.iter().all(|tag| recipe.dietary_tags.contains(tag))
    {
        return false;
    }

    let steps = recipe.step_count();
    if !state.time.accepts(steps) {
        return false;
    }
    if !state.difficulty.accepts(steps) {
        return false;
    }

    if !state.avoid_ingredients.is_empty() {
        let text = recipe.record.ingredient_text();
        if state
            .avoid_ingredients
            .iter()
            .any(|avoided| text.contains(avoided.to_lowercase().as_str()))
        {
            return false;
        }
    }

    true
}
