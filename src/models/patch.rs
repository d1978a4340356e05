//! Tri-state field used by partial-update payloads.

use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// One field of a partial update.
///
/// Fields are declared with `#[serde(default)]` so a key missing from the JSON body
/// deserializes as [`Patch::Absent`], an explicit `null` as [`Patch::Null`], and anything
/// else as [`Patch::Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

impl<T> Patch<T> {
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Reject `null` for a field that has no empty state.
    pub fn reject_null(&self, field: &str) -> Result<(), AppError> {
        match self {
            Patch::Null => Err(AppError::Validation(format!("{} may not be null", field))),
            _ => Ok(()),
        }
    }

    /// Merge into a required field. `Null` must have been rejected beforehand.
    pub fn merge_into(self, slot: &mut T) {
        if let Patch::Value(value) = self {
            *slot = value;
        }
    }

    /// Merge into an optional field, where `Null` clears it.
    pub fn merge_into_option(self, slot: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Null => *slot = None,
            Patch::Value(value) => *slot = Some(value),
        }
    }
}
