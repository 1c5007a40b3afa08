//! Slide entity model and DTOs.

use serde::{Deserialize, Serialize};
use slidedeck_core::field_update::FieldUpdate;
use slidedeck_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use ts_rs::TS;
use validator::Validate;

/// A row from the `slides` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Slide {
    #[ts(type = "number")]
    pub id: DbId,
    #[ts(type = "number")]
    pub deck_id: DbId,
    pub title: String,
    pub body_text: Option<String>,
    pub image_url: Option<String>,
    pub slide_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new slide.
///
/// Empty `body_text` / `image_url` strings are stored as `NULL`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSlide {
    pub deck_id: DbId,
    #[validate(length(min = 1, message = "Slide title is required"))]
    pub title: String,
    #[serde(default)]
    pub body_text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[validate(range(min = 0, message = "slide_order must be >= 0"))]
    pub slide_order: i32,
}

/// DTO for partially updating a slide.
///
/// `title` and `slide_order` cannot be cleared, so a plain `Option` is
/// enough. `body_text` and `image_url` use [`FieldUpdate`] so that a JSON
/// `null` clears the column while an absent key leaves it alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSlide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Slide title is required"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unset")]
    pub body_text: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_unset")]
    pub image_url: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, message = "slide_order must be >= 0"))]
    pub slide_order: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn negative_order_fails_validation() {
        let input = CreateSlide {
            deck_id: 1,
            title: "Intro".into(),
            body_text: None,
            image_url: None,
            slide_order: -1,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn zero_order_is_allowed() {
        let input = CreateSlide {
            deck_id: 1,
            title: "Intro".into(),
            body_text: None,
            image_url: None,
            slide_order: 0,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_accepts_missing_optional_fields() {
        let input: CreateSlide = serde_json::from_value(json!({
            "deck_id": 4,
            "title": "Agenda",
            "slide_order": 2
        }))
        .unwrap();
        assert_eq!(input.body_text, None);
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn update_distinguishes_absent_and_null() {
        let input: UpdateSlide = serde_json::from_value(json!({
            "title": "T",
            "body_text": null
        }))
        .unwrap();
        assert_eq!(input.title.as_deref(), Some("T"));
        assert_eq!(input.body_text, FieldUpdate::Clear);
        assert_eq!(input.image_url, FieldUpdate::Unset);
        assert_eq!(input.slide_order, None);
    }

    #[test]
    fn update_with_empty_title_fails_validation() {
        let input = UpdateSlide {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let json = serde_json::to_value(UpdateSlide::default()).unwrap();
        assert_eq!(json, json!({}));
    }
}
