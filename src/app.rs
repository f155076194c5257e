//! Activity List App
//!
//! Root component: restores the saved list, wires the form and list to the
//! store, and saves every new version of the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActivityForm, ActivityListView};
use crate::config::AppConfig;
use crate::models::{ActivityDraft, ActivityId};
use crate::repository::ActivityRepository;
use crate::storage::open_local_storage;
use crate::store::{store_activities, store_add_activity, store_remove_activity, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    let repository = ActivityRepository::new(open_local_storage(), config.storage_key);
    let store = Store::new(AppState::new(repository.load()));

    // Save on every change (runs once on mount too)
    Effect::new(move |_| {
        let activities = store_activities(&store);
        if let Err(err) = repository.save(&activities) {
            log::error!("Failed to save activities: {}", err);
        }
    });

    let on_add = Callback::new(move |draft: ActivityDraft| store_add_activity(&store, draft));
    let on_delete = Callback::new(move |id: ActivityId| store_remove_activity(&store, &id));
    let activities = Signal::derive(move || store_activities(&store));

    view! {
        <main class="app-layout">
            <h1>"Todo List Application"</h1>

            <ActivityForm on_add=on_add />

            <ActivityListView activities=activities on_delete=on_delete />
        </main>
    }
}
