//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The activity list
//! is only changed through the helpers below, each of which swaps in a new
//! collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::activity_list;
use crate::models::{Activity, ActivityDraft, ActivityId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All activities in display order
    pub activities: Vec<Activity>,
}

impl AppState {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Current activities (tracked)
pub fn store_activities(store: &AppStore) -> Vec<Activity> {
    store.activities().get()
}

/// Append a new activity built from `draft`
pub fn store_add_activity(store: &AppStore, draft: ActivityDraft) {
    let next = activity_list::add(&store.activities().get_untracked(), draft);
    log::info!("Added activity, {} total", next.len());
    *store.activities().write() = next;
}

/// Remove the activity with `id`, if present
pub fn store_remove_activity(store: &AppStore, id: &ActivityId) {
    let current = store.activities().get_untracked();
    let next = activity_list::remove(&current, id);
    if next.len() == current.len() {
        log::debug!("Remove of unknown activity {}", id);
        return;
    }
    *store.activities().write() = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn draft(name: &str) -> ActivityDraft {
        ActivityDraft::new(name, 1.0, Category::Charity, false, 0.5).unwrap()
    }

    #[test]
    fn test_store_add_and_remove() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            store_add_activity(&store, draft("Volunteer"));
            store_add_activity(&store, draft("Donate"));

            let activities = store_activities(&store);
            assert_eq!(activities.len(), 2);

            store_remove_activity(&store, &activities[0].id);
            store_remove_activity(&store, &activities[0].id);

            let remaining = store_activities(&store);
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].activity, "Donate");
        });
    }
}
