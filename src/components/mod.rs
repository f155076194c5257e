//! UI Components
//!
//! Leptos components for the activity form and list.

mod activity_form;
mod activity_list_view;
mod activity_row;
mod category_select;

pub use activity_form::ActivityForm;
pub use activity_list_view::ActivityListView;
pub use activity_row::ActivityRow;
pub use category_select::CategorySelect;
