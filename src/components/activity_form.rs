//! Activity Form Component
//!
//! Form for creating new activities. Holds the draft fields until submit.

use leptos::prelude::*;

use crate::components::CategorySelect;
use crate::format::format_accessibility;
use crate::models::{ActivityDraft, Category, DraftError};

/// Raw values of the form widgets
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub activity: String,
    /// Price as typed, parsed on submit
    pub price: String,
    pub category: Category,
    pub booking_required: bool,
    pub accessibility: f64,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            activity: String::new(),
            price: String::from("0"),
            category: Category::default(),
            booking_required: false,
            accessibility: 0.5,
        }
    }
}

impl FormFields {
    /// Draft for these fields, plus the fields the form resets to.
    ///
    /// On error the form keeps its current fields.
    pub fn submit(&self) -> Result<(ActivityDraft, FormFields), DraftError> {
        let draft = draft_from_fields(
            &self.activity,
            &self.price,
            self.category,
            self.booking_required,
            self.accessibility,
        )?;
        Ok((draft, FormFields::default()))
    }
}

/// Build a draft from widget values; `price` is the input's text
pub fn draft_from_fields(
    activity: &str,
    price: &str,
    category: Category,
    booking_required: bool,
    accessibility: f64,
) -> Result<ActivityDraft, DraftError> {
    let price_value = price
        .trim()
        .parse::<f64>()
        .map_err(|_| DraftError::InvalidPriceText(price.to_string()))?;
    ActivityDraft::new(activity, price_value, category, booking_required, accessibility)
}

/// Form for creating new activities
#[component]
pub fn ActivityForm(#[prop(into)] on_add: Callback<ActivityDraft>) -> impl IntoView {
    let initial = FormFields::default();
    let (activity, set_activity) = signal(initial.activity);
    let (price, set_price) = signal(initial.price);
    let (category, set_category) = signal(initial.category);
    let (booking_required, set_booking_required) = signal(initial.booking_required);
    let (accessibility, set_accessibility) = signal(initial.accessibility);

    let apply = move |fields: FormFields| {
        set_activity.set(fields.activity);
        set_price.set(fields.price);
        set_category.set(fields.category);
        set_booking_required.set(fields.booking_required);
        set_accessibility.set(fields.accessibility);
    };

    let create_activity = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = FormFields {
            activity: activity.get(),
            price: price.get(),
            category: category.get(),
            booking_required: booking_required.get(),
            accessibility: accessibility.get(),
        };
        match fields.submit() {
            Ok((draft, next)) => {
                on_add.run(draft);
                apply(next);
            }
            Err(err) => log::warn!("Ignoring submit: {}", err),
        }
    };

    view! {
        <form class="activity-form" on:submit=create_activity>
            <h2>"Add New Item"</h2>

            <div class="form-field">
                <label for="activity-input">"Activity"</label>
                <input
                    id="activity-input"
                    type="text"
                    required
                    prop:value=move || activity.get()
                    on:input=move |ev| set_activity.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label for="price-input">"Price"</label>
                <input
                    id="price-input"
                    type="number"
                    required
                    min="0"
                    step="0.01"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label for="category-select">"Type"</label>
                <CategorySelect
                    current=category
                    on_change=move |value: Category| set_category.set(value)
                />
            </div>

            <div class="form-field">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || booking_required.get()
                        on:change=move |ev| set_booking_required.set(event_target_checked(&ev))
                    />
                    "Booking Required"
                </label>
            </div>

            <div class="form-field">
                <label for="accessibility-input">
                    "Accessibility (" {move || format_accessibility(accessibility.get())} ")"
                </label>
                <input
                    id="accessibility-input"
                    type="range"
                    min="0"
                    max="1"
                    step="0.1"
                    prop:value=move || accessibility.get().to_string()
                    on:input=move |ev| {
                        match event_target_value(&ev).parse::<f64>() {
                            Ok(value) => set_accessibility.set(value),
                            Err(err) => log::warn!("Bad slider value: {}", err),
                        }
                    }
                />
            </div>

            <button type="submit" class="submit-btn">"Add to List"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(activity: &str, price: &str) -> FormFields {
        FormFields {
            activity: activity.to_string(),
            price: price.to_string(),
            category: Category::Music,
            booking_required: true,
            accessibility: 0.7,
        }
    }

    #[test]
    fn test_price_text_parsed_unrounded() {
        let draft = draft_from_fields("Concert", "19.999", Category::Music, true, 0.7).unwrap();
        assert_eq!(draft.price(), 19.999);

        let draft = draft_from_fields("Concert", " 3 ", Category::Music, true, 0.7).unwrap();
        assert_eq!(draft.price(), 3.0);
    }

    #[test]
    fn test_bad_price_text_rejected() {
        for text in ["", "abc"] {
            assert_eq!(
                draft_from_fields("Concert", text, Category::Music, false, 0.5),
                Err(DraftError::InvalidPriceText(text.to_string()))
            );
        }
        assert!(matches!(
            draft_from_fields("Concert", "inf", Category::Music, false, 0.5),
            Err(DraftError::InvalidPrice(_))
        ));
        assert!(matches!(
            draft_from_fields("Concert", "-1", Category::Music, false, 0.5),
            Err(DraftError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_submit_resets_to_defaults() {
        let (draft, next) = fields("Guitar lesson", "25.5").submit().unwrap();

        assert_eq!(draft.activity(), "Guitar lesson");
        assert_eq!(draft.price(), 25.5);
        assert_eq!(draft.category(), Category::Music);
        assert!(draft.booking_required());
        assert_eq!(draft.accessibility(), 0.7);

        assert_eq!(next.activity, "");
        assert_eq!(next.price, "0");
        assert_eq!(next.category, Category::Education);
        assert!(!next.booking_required);
        assert_eq!(next.accessibility, 0.5);
        assert_eq!(next, FormFields::default());
    }

    #[test]
    fn test_failed_submit_has_no_reset() {
        assert_eq!(
            fields("Guitar lesson", "abc").submit(),
            Err(DraftError::InvalidPriceText("abc".to_string()))
        );
        assert_eq!(fields("  ", "1").submit(), Err(DraftError::EmptyActivity));
    }
}
