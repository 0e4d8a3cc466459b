//! Player profile persistence
//!
//! The core performs no storage I/O of its own. The host supplies a
//! [`KvStore`] and brackets core operations with explicit `load`/`save`
//! calls. Missing or corrupt values fall back to fixed defaults instead of
//! propagating a fault.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::economy::STARTING_BALANCE;

/// Key for the persisted balance
pub const BALANCE_KEY: &str = "candy_balance_v1";
/// Key for the wheel cooldown end timestamp (epoch seconds, 0 = none)
pub const WHEEL_COOLDOWN_KEY: &str = "wheel_cooldown_end";

/// Minimal key/value store the host backs with whatever it has
/// (LocalStorage, UserDefaults, a file, ...).
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and headless hosts
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// The persisted slice of player state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub balance: i64,
    pub wheel_cooldown_end: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            balance: STARTING_BALANCE,
            wheel_cooldown_end: 0.0,
        }
    }
}

impl Profile {
    /// Load the profile, falling back to defaults per field
    pub fn load(store: &dyn KvStore) -> Self {
        let defaults = Self::default();
        let balance = read_field(store, BALANCE_KEY).unwrap_or(defaults.balance);
        let wheel_cooldown_end =
            read_field(store, WHEEL_COOLDOWN_KEY).unwrap_or(defaults.wheel_cooldown_end);
        Self {
            balance,
            wheel_cooldown_end,
        }
    }

    /// Write both fields; called by the host after every settling operation
    pub fn save(&self, store: &mut dyn KvStore) {
        write_field(store, BALANCE_KEY, &self.balance);
        write_field(store, WHEEL_COOLDOWN_KEY, &self.wheel_cooldown_end);
    }
}

fn read_field<T: serde::de::DeserializeOwned>(store: &dyn KvStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding corrupt value for {key}: {err}");
            None
        }
    }
}

fn write_field<T: Serialize>(store: &mut dyn KvStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(err) => log::warn!("failed to serialize {key}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_when_empty() {
        let store = MemoryStore::new();
        let profile = Profile::load(&store);
        assert_eq!(profile.balance, STARTING_BALANCE);
        assert_eq!(profile.wheel_cooldown_end, 0.0);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut store = MemoryStore::new();
        let profile = Profile {
            balance: 3_210,
            wheel_cooldown_end: 1_700_000_000.5,
        };
        profile.save(&mut store);
        assert_eq!(Profile::load(&store), profile);
    }

    #[test]
    fn test_corrupt_field_falls_back_per_field() {
        let mut store = MemoryStore::new();
        store.set(BALANCE_KEY, "not a number");
        store.set(WHEEL_COOLDOWN_KEY, "42.0");

        let profile = Profile::load(&store);
        assert_eq!(profile.balance, STARTING_BALANCE);
        assert_eq!(profile.wheel_cooldown_end, 42.0);
    }

    #[test]
    fn test_negative_balance_persists() {
        // A loss can drive the balance negative before recovery; the store
        // must carry whatever the ledger holds.
        let mut store = MemoryStore::new();
        Profile {
            balance: -30,
            wheel_cooldown_end: 0.0,
        }
        .save(&mut store);
        assert_eq!(Profile::load(&store).balance, -30);
    }
}
