//! Key-value persistence trait and the typed state store built on it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::error::{AdvisorError, Result};
use crate::language::Language;
use crate::selection::Selection;

/// Storage key of the selected products (JSON array of product objects).
pub const SELECTED_PRODUCTS_KEY: &str = "selectedProducts";
/// Storage key of the language preference (two-letter code).
pub const LANGUAGE_KEY: &str = "language";

/// Flat string key-value storage.
///
/// Keys are independent; a missing key is `Ok(None)`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store for tests and for running without a data directory.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AdvisorError::internal("key-value store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AdvisorError::internal("key-value store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed access to the persisted selection and language preference.
///
/// Loading never fails: unreadable or malformed values are logged and treated
/// as absent.
#[derive(Clone)]
pub struct StateStore {
    kv: Arc<dyn KeyValueStore>,
}

impl StateStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Restores the selection, or an empty one.
    pub fn load_selection(&self) -> Selection {
        let Some(raw) = self.read(SELECTED_PRODUCTS_KEY) else {
            return Selection::new();
        };
        match serde_json::from_str::<Selection>(&raw) {
            Ok(selection) => selection,
            Err(e) => {
                warn!(key = SELECTED_PRODUCTS_KEY, error = %e, "Ignoring malformed stored selection");
                Selection::new()
            }
        }
    }

    pub fn save_selection(&self, selection: &Selection) -> Result<()> {
        let json = serde_json::to_string(selection)?;
        self.kv.set(SELECTED_PRODUCTS_KEY, &json)
    }

    /// Restores the language preference, or the default language.
    pub fn load_language(&self) -> Language {
        let Some(raw) = self.read(LANGUAGE_KEY) else {
            return Language::default();
        };
        Language::from_code(raw.trim()).unwrap_or_else(|| {
            warn!(key = LANGUAGE_KEY, value = %raw, "Ignoring unknown stored language");
            Language::default()
        })
    }

    pub fn save_language(&self, language: Language) -> Result<()> {
        self.kv.set(LANGUAGE_KEY, language.code())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored value");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Category, Product};

    fn store() -> (Arc<InMemoryKeyValueStore>, StateStore) {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        (kv.clone(), StateStore::new(kv))
    }

    fn product(id: u32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: "CeraVe".to_string(),
            category: Category::Cleanser,
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_missing_keys_mean_defaults() {
        let (_, state) = store();
        assert!(state.load_selection().is_empty());
        assert_eq!(state.load_language(), Language::English);
    }

    #[test]
    fn test_selection_round_trip_keeps_order() {
        let (kv, state) = store();
        let selection = Selection::from_products(vec![product(3, "C"), product(1, "A"), product(2, "B")]);
        state.save_selection(&selection).unwrap();

        let raw = kv.get(SELECTED_PRODUCTS_KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));

        let restored = state.load_selection();
        let ids: Vec<u32> = restored.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_malformed_values_are_ignored() {
        let (kv, state) = store();
        kv.set(SELECTED_PRODUCTS_KEY, "{not json").unwrap();
        kv.set(LANGUAGE_KEY, "fr").unwrap();

        assert!(state.load_selection().is_empty());
        assert_eq!(state.load_language(), Language::English);
    }

    #[test]
    fn test_language_round_trip() {
        let (kv, state) = store();
        state.save_language(Language::Arabic).unwrap();
        assert_eq!(kv.get(LANGUAGE_KEY).unwrap().as_deref(), Some("ar"));
        assert_eq!(state.load_language(), Language::Arabic);
    }

    #[test]
    fn test_duplicate_stored_ids_are_dropped() {
        let (kv, state) = store();
        let json = serde_json::to_string(&vec![product(1, "A"), product(1, "A again")]).unwrap();
        kv.set(SELECTED_PRODUCTS_KEY, &json).unwrap();

        let restored = state.load_selection();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.products()[0].name, "A");
    }
}
