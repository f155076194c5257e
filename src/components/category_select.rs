//! Category Select Component
//!
//! Single-select of the fixed activity categories.

use leptos::prelude::*;

use crate::models::Category;

#[component]
pub fn CategorySelect(
    current: ReadSignal<Category>,
    on_change: impl Fn(Category) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id="category-select"
            prop:value=move || current.get().as_str()
            on:change=move |ev| {
                match event_target_value(&ev).parse::<Category>() {
                    Ok(category) => on_change(category),
                    Err(err) => log::warn!("{}", err),
                }
            }
        >
            {Category::ALL.into_iter().map(|category| {
                view! {
                    <option
                        value=category.as_str()
                        selected=move || current.get() == category
                    >
                        {category.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
