//! Frontend Models
//!
//! Activity records as they are stored in local storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque unique identifier of an activity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Fresh random (v4) identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Activity category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl Category {
    /// All categories in form order
    pub const ALL: [Category; 9] = [
        Category::Education,
        Category::Recreational,
        Category::Social,
        Category::Diy,
        Category::Charity,
        Category::Cooking,
        Category::Relaxation,
        Category::Music,
        Category::Busywork,
    ];

    /// Value used on the wire and in `<option value>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Recreational => "recreational",
            Category::Social => "social",
            Category::Diy => "diy",
            Category::Charity => "charity",
            Category::Cooking => "cooking",
            Category::Relaxation => "relaxation",
            Category::Music => "music",
            Category::Busywork => "busywork",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::Recreational => "Recreational",
            Category::Social => "Social",
            Category::Diy => "DIY",
            Category::Charity => "Charity",
            Category::Cooking => "Cooking",
            Category::Relaxation => "Relaxation",
            Category::Music => "Music",
            Category::Busywork => "Busywork",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a draft cannot be built from form input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("activity must not be empty")]
    EmptyActivity,
    #[error("price {0:?} is not a number")]
    InvalidPriceText(String),
    #[error("price must be a non-negative number, got {0}")]
    InvalidPrice(f64),
    #[error("accessibility must be between 0 and 1, got {0}")]
    InvalidAccessibility(f64),
}

/// An activity's fields before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    activity: String,
    price: f64,
    category: Category,
    booking_required: bool,
    accessibility: f64,
}

impl ActivityDraft {
    pub fn new(
        activity: impl Into<String>,
        price: f64,
        category: Category,
        booking_required: bool,
        accessibility: f64,
    ) -> Result<Self, DraftError> {
        let activity = activity.into();
        if activity.trim().is_empty() {
            return Err(DraftError::EmptyActivity);
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DraftError::InvalidPrice(price));
        }
        if !(0.0..=1.0).contains(&accessibility) {
            return Err(DraftError::InvalidAccessibility(accessibility));
        }
        Ok(Self {
            activity,
            price,
            category,
            booking_required,
            accessibility,
        })
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn booking_required(&self) -> bool {
        self.booking_required
    }

    pub fn accessibility(&self) -> f64 {
        self.accessibility
    }
}

/// Activity data structure (one entry of the stored JSON array)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: ActivityId,
    pub activity: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub category: Category,
    pub booking_required: bool,
    pub accessibility: f64,
}

impl Activity {
    pub fn from_draft(id: ActivityId, draft: ActivityDraft) -> Self {
        Self {
            id,
            activity: draft.activity,
            price: draft.price,
            category: draft.category,
            booking_required: draft.booking_required,
            accessibility: draft.accessibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let draft = ActivityDraft::new("Swim", 10.0, Category::Recreational, false, 0.8).unwrap();
        let activity = Activity::from_draft(ActivityId::from("a1"), draft);

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "a1",
                "activity": "Swim",
                "price": 10.0,
                "type": "recreational",
                "bookingRequired": false,
                "accessibility": 0.8,
            })
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert_eq!("diy".parse::<Category>(), Ok(Category::Diy));
        assert_eq!(
            "sports".parse::<Category>(),
            Err(ParseCategoryError("sports".to_string()))
        );
        assert!("Education".parse::<Category>().is_err());

        let json = r#"{"id":"x","activity":"Run","price":0,"type":"sports","bookingRequired":false,"accessibility":0.5}"#;
        assert!(serde_json::from_str::<Activity>(json).is_err());
    }

    #[test]
    fn test_category_wire_values_match_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        assert_eq!(Category::Diy.label(), "DIY");
        assert_eq!(Category::default(), Category::Education);
    }

    #[test]
    fn test_draft_validation() {
        assert_eq!(
            ActivityDraft::new("   ", 1.0, Category::Social, false, 0.5),
            Err(DraftError::EmptyActivity)
        );
        assert_eq!(
            ActivityDraft::new("Paint", -0.01, Category::Diy, false, 0.5),
            Err(DraftError::InvalidPrice(-0.01))
        );
        assert!(matches!(
            ActivityDraft::new("Paint", f64::NAN, Category::Diy, false, 0.5),
            Err(DraftError::InvalidPrice(_))
        ));
        assert_eq!(
            ActivityDraft::new("Paint", 0.0, Category::Diy, false, 1.1),
            Err(DraftError::InvalidAccessibility(1.1))
        );
        assert!(ActivityDraft::new("Paint", 0.0, Category::Diy, true, 1.0).is_ok());
    }

    #[test]
    fn test_draft_keeps_unrounded_price() {
        let draft = ActivityDraft::new("Concert", 19.999, Category::Music, true, 0.3).unwrap();
        let activity = Activity::from_draft(ActivityId::generate(), draft);
        assert_eq!(activity.price, 19.999);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(ActivityId::generate(), ActivityId::generate());
    }
}
