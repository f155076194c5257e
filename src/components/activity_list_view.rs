//! Activity List View Component
//!
//! Read-only list of activities. Rows are keyed by id so adding or removing
//! one activity leaves the other rows alone.

use leptos::prelude::*;

use crate::components::ActivityRow;
use crate::models::{Activity, ActivityId};

#[component]
pub fn ActivityListView(
    #[prop(into)] activities: Signal<Vec<Activity>>,
    #[prop(into)] on_delete: Callback<ActivityId>,
) -> impl IntoView {
    let count = move || activities.with(|list| list.len());

    view! {
        <section class="activity-list">
            <h2>"To-Do List"</h2>
            <div class="item-count">{move || format!("Total items: {}", count())}</div>

            <Show
                when=move || { count() > 0 }
                fallback=|| view! { <p class="empty-state">"No items in the list. Add one above!"</p> }
            >
                <ul class="activity-rows">
                    <For
                        each=move || activities.get()
                        key=|activity| activity.id.clone()
                        children=move |activity| {
                            view! { <ActivityRow activity=activity on_delete=on_delete /> }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
