//! Activity List Operations
//!
//! Pure transformations of the activity collection. Each call returns a new
//! collection; callers replace their state with the result.

use crate::models::{Activity, ActivityDraft, ActivityId};

/// Append `draft` with a freshly generated id
pub fn add(activities: &[Activity], draft: ActivityDraft) -> Vec<Activity> {
    add_with_ids(activities, draft, ActivityId::generate)
}

/// Append `draft`, drawing ids from `next_id` until one is unused
pub fn add_with_ids(
    activities: &[Activity],
    draft: ActivityDraft,
    mut next_id: impl FnMut() -> ActivityId,
) -> Vec<Activity> {
    let mut id = next_id();
    while activities.iter().any(|activity| activity.id == id) {
        id = next_id();
    }

    let mut next = Vec::with_capacity(activities.len() + 1);
    next.extend_from_slice(activities);
    next.push(Activity::from_draft(id, draft));
    next
}

/// Everything except activities with `id`. Unknown ids leave the list as is.
pub fn remove(activities: &[Activity], id: &ActivityId) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| &activity.id != id)
        .cloned()
        .collect()
}
