//! Activity Row Component
//!
//! One entry of the activity list.

use leptos::prelude::*;

use crate::config::use_app_config;
use crate::format::{booking_label, format_accessibility, format_price};
use crate::models::{Activity, ActivityId};

#[component]
pub fn ActivityRow(
    activity: Activity,
    #[prop(into)] on_delete: Callback<ActivityId>,
) -> impl IntoView {
    let config = use_app_config();
    let id = activity.id.clone();
    let price = format_price(config.currency_prefix, activity.price);

    view! {
        <li class="activity-row">
            <div class="activity-details">
                <div class="activity-name">{activity.activity}</div>
                <div class="activity-meta">
                    <span>"Price: " {price}</span>
                    <span>"Type: " {activity.category.as_str()}</span>
                    <span>{booking_label(activity.booking_required)}</span>
                    <span>"Accessibility: " {format_accessibility(activity.accessibility)}</span>
                </div>
            </div>
            <button
                class="delete-btn"
                on:click=move |_| on_delete.run(id.clone())
            >
                "Delete"
            </button>
        </li>
    }
}
