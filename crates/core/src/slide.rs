//! Slide rules shared by the repository, API and client layers.

/// Entity name used in not-found errors for slides.
pub const SLIDE_ENTITY: &str = "Slide";

/// Optional text columns store `NULL` rather than the empty string.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Default `slide_order` for a slide appended to a deck that already
/// holds `existing` slides.
pub fn next_slide_order(existing: usize) -> i32 {
    i32::try_from(existing).map_or(i32::MAX, |n| n.saturating_add(1))
}
