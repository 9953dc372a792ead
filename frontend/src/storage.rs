#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::ledger::Ledger;
use crate::models::{Goal, Transaction, UserSettings};

pub const SETTINGS_KEY: &str = "finanwise_settings";
pub const TRANSACTIONS_KEY: &str = "finanwise_transactions";
pub const GOALS_KEY: &str = "finanwise_goals";
/// Appended to a key when an unreadable value is set aside before it can be
/// overwritten.
pub const BACKUP_SUFFIX: &str = "_backup";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Js(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Js(format!("{:?}", e)))
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Typed access to the persisted collections. Reads never fail: a missing or
/// unreadable value yields the default and a warning in the log. Stored lists
/// are read record by record so one bad entry only costs that entry, and the
/// raw value is copied under `<key>_backup` whenever anything was dropped.
pub struct Persistence<S: KeyValueStore> {
    store: S,
}

impl Persistence<BrowserStore> {
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not read `{}`: {}", key, e);
                None
            }
        }
    }

    fn back_up(&self, key: &str, raw: &str) {
        let backup = format!("{}{}", key, BACKUP_SUFFIX);
        match self.store.set(&backup, raw) {
            Ok(()) => log::warn!("kept the unreadable `{}` under `{}`", key, backup),
            Err(e) => log::error!("could not back up `{}`: {}", key, e),
        }
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.read(key) else {
            return T::default();
        };
        match serde_json::from_str::<T>(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("discarding unreadable `{}`: {}", key, e);
                self.back_up(key, &raw);
                T::default()
            }
        }
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.read(key) else {
            return Vec::new();
        };
        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("discarding unreadable `{}`: {}", key, e);
                self.back_up(key, &raw);
                return Vec::new();
            }
        };

        let stored = records.len();
        let items: Vec<T> = records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("skipping record {} of `{}`: {}", i, key, e);
                    None
                }
            })
            .collect();
        if items.len() < stored {
            self.back_up(key, &raw);
        }
        items
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)?;
        log::debug!("saved `{}` ({} bytes)", key, raw.len());
        Ok(())
    }

    pub fn load_settings(&self) -> UserSettings {
        self.load_or_default(SETTINGS_KEY)
    }

    pub fn save_settings(&self, settings: &UserSettings) -> Result<(), StorageError> {
        self.save(SETTINGS_KEY, settings)
    }

    pub fn load_transactions(&self) -> Vec<Transaction> {
        self.load_list(TRANSACTIONS_KEY)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        self.save(TRANSACTIONS_KEY, transactions)
    }

    pub fn load_goals(&self) -> Vec<Goal> {
        self.load_list(GOALS_KEY)
    }

    pub fn save_goals(&self, goals: &[Goal]) -> Result<(), StorageError> {
        self.save(GOALS_KEY, goals)
    }

    pub fn load_ledger(&self) -> Ledger {
        Ledger::new(self.load_settings(), self.load_transactions(), self.load_goals())
    }

    /// Writes the collections that differ between two ledger states and
    /// returns how many were written. Identical states touch nothing.
    pub fn save_changes(&self, before: &Ledger, after: &Ledger) -> Result<usize, StorageError> {
        let mut written = 0;
        if before.transactions != after.transactions {
            self.save_transactions(&after.transactions)?;
            written += 1;
        }
        if before.goals != after.goals {
            self.save_goals(&after.goals)?;
            written += 1;
        }
        if before.settings != after.settings {
            self.save_settings(&after.settings)?;
            written += 1;
        }
        Ok(written)
    }

    /// Drops transactions and goals; settings survive a reset.
    pub fn clear_data(&self) -> Result<(), StorageError> {
        self.store.remove(TRANSACTIONS_KEY)?;
        self.store.remove(GOALS_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerAction;
    use crate::models::{Currency, Priority, Theme, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::rc::Rc;
    use yew::Reducible;

    fn persistence() -> Persistence<MemoryStore> {
        Persistence::new(MemoryStore::default())
    }

    fn sample_tx() -> Transaction {
        Transaction {
            id: "t1".into(),
            kind: TransactionKind::Expense,
            amount: dec!(99.9),
            category: "Transporte".into(),
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            description: "SUBE".into(),
        }
    }

    #[test]
    fn missing_keys_load_defaults() {
        let p = persistence();
        assert_eq!(p.load_settings(), UserSettings::default());
        assert!(p.load_transactions().is_empty());
        assert!(p.load_goals().is_empty());
    }

    #[test]
    fn saved_values_come_back() {
        let p = persistence();
        let settings = UserSettings {
            currency: Currency::Usd,
            theme: Theme::Dark,
        };
        p.save_settings(&settings).unwrap();
        p.save_transactions(&[sample_tx()]).unwrap();

        assert_eq!(p.load_settings(), settings);
        assert_eq!(p.load_transactions(), vec![sample_tx()]);
    }

    #[test]
    fn corrupt_json_falls_back_to_default() {
        let store = MemoryStore::default();
        store.set(TRANSACTIONS_KEY, "{not json").unwrap();
        let p = Persistence::new(store);
        assert!(p.load_transactions().is_empty());
    }

    #[test]
    fn reads_data_written_by_the_web_app() {
        let store = MemoryStore::default();
        store
            .set(
                GOALS_KEY,
                r#"[{"id":"x1","title":"Viaje","description":"","target":3000,"current":0,"priority":"Low","category":"Viaje"}]"#,
            )
            .unwrap();
        let goals = Persistence::new(store).load_goals();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].priority, Priority::Low);
        assert_eq!(goals[0].target, dec!(3000));
    }

    #[test]
    fn clear_data_keeps_settings() {
        let p = persistence();
        let settings = UserSettings {
            currency: Currency::Eur,
            theme: Theme::Light,
        };
        p.save_settings(&settings).unwrap();
        p.save_transactions(&[sample_tx()]).unwrap();
        p.save_goals(&[]).unwrap();

        p.clear_data().unwrap();

        assert!(p.load_transactions().is_empty());
        assert!(p.store.get(GOALS_KEY).unwrap().is_none());
        assert_eq!(p.load_settings(), settings);
    }

    const ONE_GOOD_ONE_BAD: &str = r#"[
        {"id":"t1","type":"income","amount":1500,"category":"Sueldo","date":"2024-03-01","description":"Marzo"},
        {"id":"t2","type":"expense","amount":null,"category":"Ocio","date":"2024-03-02","description":"Cine"}
    ]"#;

    fn goal(id: &str) -> Goal {
        Goal {
            id: id.into(),
            title: "Laptop".into(),
            description: String::new(),
            target: dec!(1200),
            current: Decimal::ZERO,
            priority: Priority::Medium,
            category: "Ahorro".into(),
        }
    }

    fn step(ledger: &Ledger, action: LedgerAction) -> Ledger {
        (*Rc::new(ledger.clone()).reduce(action)).clone()
    }

    #[test]
    fn a_bad_record_only_costs_itself() {
        let store = MemoryStore::default();
        store.set(TRANSACTIONS_KEY, ONE_GOOD_ONE_BAD).unwrap();
        let p = Persistence::new(store);

        let loaded = p.load_transactions();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "t1");
        assert_eq!(loaded[0].amount, dec!(1500));

        let backup = format!("{}{}", TRANSACTIONS_KEY, BACKUP_SUFFIX);
        assert_eq!(p.store.get(&backup).unwrap().as_deref(), Some(ONE_GOOD_ONE_BAD));
    }

    #[test]
    fn clean_loads_leave_no_backup() {
        let p = persistence();
        p.save_transactions(&[sample_tx()]).unwrap();
        assert_eq!(p.load_transactions().len(), 1);
        let backup = format!("{}{}", TRANSACTIONS_KEY, BACKUP_SUFFIX);
        assert!(p.store.get(&backup).unwrap().is_none());
    }

    #[test]
    fn unreadable_list_is_set_aside() {
        let store = MemoryStore::default();
        store.set(GOALS_KEY, "{not json").unwrap();
        let p = Persistence::new(store);
        assert!(p.load_goals().is_empty());
        let backup = format!("{}{}", GOALS_KEY, BACKUP_SUFFIX);
        assert_eq!(p.store.get(&backup).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn loading_then_saving_unchanged_state_keeps_stored_records() {
        let store = MemoryStore::default();
        store.set(TRANSACTIONS_KEY, ONE_GOOD_ONE_BAD).unwrap();
        let p = Persistence::new(store);

        let ledger = p.load_ledger();
        assert_eq!(p.save_changes(&ledger, &ledger).unwrap(), 0);
        assert_eq!(
            p.store.get(TRANSACTIONS_KEY).unwrap().as_deref(),
            Some(ONE_GOOD_ONE_BAD)
        );
    }

    #[test]
    fn each_action_persists_what_it_touched() {
        let p = persistence();
        let start = p.load_ledger();

        let added = step(&start, LedgerAction::AddTransaction(sample_tx()));
        assert_eq!(p.save_changes(&start, &added).unwrap(), 1);
        assert_eq!(p.load_transactions(), vec![sample_tx()]);
        assert!(p.store.get(GOALS_KEY).unwrap().is_none());

        let with_goal = step(&added, LedgerAction::AddGoal(goal("g1")));
        assert_eq!(p.save_changes(&added, &with_goal).unwrap(), 1);

        let funded = step(
            &with_goal,
            LedgerAction::Contribute {
                goal_id: "g1".into(),
                amount: dec!(200),
            },
        );
        p.save_changes(&with_goal, &funded).unwrap();
        assert_eq!(p.load_goals()[0].current, dec!(200));

        let deleted = step(&funded, LedgerAction::DeleteTransaction("t1".into()));
        p.save_changes(&funded, &deleted).unwrap();
        assert!(p.load_transactions().is_empty());

        let settings = UserSettings {
            currency: Currency::Usd,
            theme: Theme::Dark,
        };
        let styled = step(&deleted, LedgerAction::SetSettings(settings.clone()));
        assert_eq!(p.save_changes(&deleted, &styled).unwrap(), 1);

        let cleared = step(&styled, LedgerAction::ClearData);
        p.save_changes(&styled, &cleared).unwrap();
        let reloaded = p.load_ledger();
        assert!(reloaded.transactions.is_empty());
        assert!(reloaded.goals.is_empty());
        assert_eq!(reloaded.settings, settings);
    }

    #[test]
    fn dismissing_a_notification_writes_nothing() {
        let p = persistence();
        let start = p.load_ledger();
        let dismissed = step(&start, LedgerAction::DismissNotification("1".into()));
        assert_eq!(p.save_changes(&start, &dismissed).unwrap(), 0);
    }
}
