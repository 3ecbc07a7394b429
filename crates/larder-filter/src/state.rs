//! FilterState persistence in the settings store.
//!
//! Scalar facets are stored as their symbolic snake_case names, set
//! facets as JSON string arrays. Unknown stored values fall back to the
//! facet's default instead of failing the load, so stale settings from
//! an older schema never brick startup.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use larder_core::errors::{LarderError, LarderResult, StoreError};
use larder_core::models::{Cuisine, DietaryTag, FilterState};
use larder_core::traits::ISettingsStore;

const KEY_AVAILABILITY: &str = "availability_filter";
const KEY_CUISINES: &str = "cuisine_filters";
const KEY_DIETARY: &str = "dietary_filters";
const KEY_TIME: &str = "time_filter";
const KEY_DIFFICULTY: &str = "difficulty_filter";
const KEY_AVOID: &str = "avoid_ingredients";
const KEY_EXPIRING_FIRST: &str = "expiring_first";

/// Reads and writes `FilterState` through a settings store.
pub struct FilterStore {
    settings: Arc<dyn ISettingsStore>,
}

impl FilterStore {
    pub fn new(settings: Arc<dyn ISettingsStore>) -> Self {
        Self { settings }
    }

    /// Load the persisted state; absent or unrecognized values yield the
    /// facet defaults.
    pub fn load(&self) -> LarderResult<FilterState> {
        Ok(FilterState {
            availability: self.load_variant(KEY_AVAILABILITY)?,
            cuisines: self.load_set::<Cuisine>(KEY_CUISINES)?,
            dietary: self.load_set::<DietaryTag>(KEY_DIETARY)?,
            time: self.load_variant(KEY_TIME)?,
            difficulty: self.load_variant(KEY_DIFFICULTY)?,
            avoid_ingredients: self.load_strings(KEY_AVOID)?,
            expiring_first: self.settings.get_bool(KEY_EXPIRING_FIRST)?,
        })
    }

    /// Persist the full state, one key per facet.
    pub fn save(&self, state: &FilterState) -> LarderResult<()> {
        self.save_variant(KEY_AVAILABILITY, &state.availability)?;
        self.save_set(KEY_CUISINES, &state.cuisines)?;
        self.save_set(KEY_DIETARY, &state.dietary)?;
        self.save_variant(KEY_TIME, &state.time)?;
        self.save_variant(KEY_DIFFICULTY, &state.difficulty)?;
        self.save_strings(KEY_AVOID, &state.avoid_ingredients)?;
        self.settings.set_bool(KEY_EXPIRING_FIRST, state.expiring_first)?;
        tracing::debug!(active = state.active_filter_count(), "filter state saved");
        Ok(())
    }

    fn load_variant<T: DeserializeOwned + Default>(&self, key: &str) -> LarderResult<T> {
        match self.settings.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&format!("\"{raw}\"")).unwrap_or_default()),
            None => Ok(T::default()),
        }
    }

    fn save_variant<T: Serialize>(&self, key: &str, value: &T) -> LarderResult<()> {
        let encoded = serde_json::to_string(value).map_err(|e| decode_err(key, e))?;
        self.settings.set(key, encoded.trim_matches('"'))
    }

    /// Sets are decoded element-wise so a single unknown name is dropped
    /// rather than discarding the whole set.
    fn load_set<T: DeserializeOwned + Ord>(&self, key: &str) -> LarderResult<BTreeSet<T>> {
        let names = self.load_strings(key)?;
        Ok(names
            .iter()
            .filter_map(|name| serde_json::from_str(&format!("\"{name}\"")).ok())
            .collect())
    }

    fn save_set<T: Serialize + Ord>(&self, key: &str, values: &BTreeSet<T>) -> LarderResult<()> {
        let names: Vec<String> = values
            .iter()
            .map(|v| {
                serde_json::to_string(v)
                    .map(|s| s.trim_matches('"').to_string())
                    .map_err(|e| decode_err(key, e))
            })
            .collect::<LarderResult<_>>()?;
        let encoded = serde_json::to_string(&names).map_err(|e| decode_err(key, e))?;
        self.settings.set(key, &encoded)
    }

    fn load_strings(&self, key: &str) -> LarderResult<BTreeSet<String>> {
        match self.settings.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => Ok(BTreeSet::new()),
        }
    }

    fn save_strings(&self, key: &str, values: &BTreeSet<String>) -> LarderResult<()> {
        let encoded = serde_json::to_string(values).map_err(|e| decode_err(key, e))?;
        self.settings.set(key, &encoded)
    }
}

fn decode_err(key: &str, e: serde_json::Error) -> LarderError {
    LarderError::Store(StoreError::SettingsDecode {
        key: key.to_string(),
        reason: e.to_string(),
    })
}