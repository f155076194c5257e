//! Activity Repository
//!
//! Whole-collection persistence: one JSON array under one storage key.

use std::collections::HashSet;

use crate::models::{Activity, ActivityId};
use crate::storage::{KeyValueStore, StorageError};

pub struct ActivityRepository {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl ActivityRepository {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored collection, or empty when absent, unreadable or corrupt
    pub fn load(&self) -> Vec<Activity> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::error!("Failed to read saved activities: {}", err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Activity>>(&raw) {
            Ok(mut activities) => {
                repair_duplicate_ids(&mut activities);
                log::info!("Loaded {} activities from `{}`", activities.len(), self.key);
                activities
            }
            Err(err) => {
                log::error!("Failed to parse saved activities, starting empty: {}", err);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with `activities`
    pub fn save(&self, activities: &[Activity]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(activities)?;
        self.store.set(&self.key, &raw)?;
        log::debug!("Saved {} activities to `{}`", activities.len(), self.key);
        Ok(())
    }
}

/// Give every repeated id after its first occurrence a fresh id
fn repair_duplicate_ids(activities: &mut [Activity]) {
    let mut taken: HashSet<ActivityId> = activities.iter().map(|a| a.id.clone()).collect();
    let mut seen = HashSet::new();
    for activity in activities.iter_mut() {
        if seen.insert(activity.id.clone()) {
            continue;
        }
        let mut id = ActivityId::generate();
        while taken.contains(&id) {
            id = ActivityId::generate();
        }
        log::warn!("Duplicate activity id {} in saved data, reassigned to {}", activity.id, id);
        taken.insert(id.clone());
        seen.insert(id.clone());
        activity.id = id;
    }
}
