use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::config::{DRAFT_STORAGE_KEY, NAME_STORAGE_KEY};
use crate::draft::{Draft, TeamEntry};
use crate::reference::ReferenceDataset;

/// String key-value persistence the draft lives in (browser local storage
/// in the client, [`MemoryStore`] in tests).
///
/// Writes are fire-and-forget; implementations swallow their own failures.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Outcome of reading a stored draft, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Letters whose stored list replaced the reference default.
    pub restored: Vec<String>,
    /// Known letters present in storage but not a readable list.
    pub rejected: Vec<String>,
}

/// Draft and saved-identity persistence over an injected store.
pub struct DraftStore<S> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reference defaults overlaid with whatever valid groups are stored.
    /// `None` when nothing usable is stored; callers keep their defaults.
    pub fn load(&self, reference: &ReferenceDataset) -> Option<Draft> {
        self.load_with_report(reference).map(|(draft, _)| draft)
    }

    pub fn load_with_report(&self, reference: &ReferenceDataset) -> Option<(Draft, LoadReport)> {
        let raw = self.store.get(DRAFT_STORAGE_KEY)?;
        let Ok(Value::Object(stored)) = serde_json::from_str::<Value>(&raw) else {
            return None;
        };

        let mut draft = reference.draft();
        let mut report = LoadReport::default();
        let letters: Vec<String> = reference.defaults().letters().map(str::to_string).collect();
        for letter in letters {
            let Some(value) = stored.get(&letter) else {
                continue;
            };
            if !value.is_array() {
                report.rejected.push(letter);
                continue;
            }
            match serde_json::from_value::<Vec<TeamEntry>>(value.clone()) {
                Ok(teams) => {
                    draft.set_group(&letter, teams);
                    report.restored.push(letter);
                }
                Err(_) => report.rejected.push(letter),
            }
        }
        Some((draft, report))
    }

    pub fn save(&self, draft: &Draft) -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(draft)?;
        self.store.set(DRAFT_STORAGE_KEY, &json);
        Ok(())
    }

    pub fn load_name(&self) -> Option<String> {
        self.store
            .get(NAME_STORAGE_KEY)
            .filter(|name| !name.is_empty())
    }

    /// Store the trimmed name. Blank input is ignored and returns `None`.
    pub fn save_name(&self, name: &str) -> Option<String> {
        let clean = name.trim();
        if clean.is_empty() {
            return None;
        }
        self.store.set(NAME_STORAGE_KEY, clean);
        Some(clean.to_string())
    }
}
