//! Tri-state field updates for partial `PATCH` payloads.
//!
//! A plain `Option<T>` cannot tell "key absent" apart from "key present
//! with `null`". [`FieldUpdate`] keeps the three cases distinct:
//!
//! | JSON                 | Value            | Effect            |
//! |----------------------|------------------|-------------------|
//! | key absent           | `Unset`          | leave unchanged   |
//! | `"key": null`        | `Clear`          | set to `NULL`     |
//! | `"key": "value"`     | `Set("value")`   | set to the value  |
//!
//! Fields must carry `#[serde(default)]` so an absent key falls back to
//! `Unset`, and `skip_serializing_if = "FieldUpdate::is_unset"` so the
//! round trip through a client preserves absence.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the stored value unchanged.
    #[default]
    Unset,
    /// Store `NULL`.
    Clear,
    /// Store the given value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, FieldUpdate::Unset)
    }

    /// Whether the request mentioned this field at all.
    pub fn is_provided(&self) -> bool {
        !self.is_unset()
    }

    /// The value to store when [`is_provided`](Self::is_provided) is true.
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(v) => Some(v),
            FieldUpdate::Unset | FieldUpdate::Clear => None,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some` sets, `None` clears. There is no way to express `Unset`
    /// through a single `Option`.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldUpdate::Set(v),
            None => FieldUpdate::Clear,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldUpdate::Set(v) => serializer.serialize_some(v),
            FieldUpdate::Unset | FieldUpdate::Clear => serializer.serialize_none(),
        }
    }
}
