//! Item types for the minimal demo resource.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::ItemId;
use crate::validation::{ValidationError, ValidationReason, char_len};

/// A validated item name (1-100 characters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Maximum length of an item name, in characters.
    pub const MAX_LENGTH: usize = 100;

    /// Parse an `ItemName` from an optional query value.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` on field `name` if the value is missing,
    /// empty, or longer than [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: Option<&str>) -> Result<Self, ValidationError> {
        match s {
            Some(name) if (1..=Self::MAX_LENGTH).contains(&char_len(name)) => {
                Ok(Self(name.to_owned()))
            }
            _ => Err(ValidationError::new(
                "name",
                ValidationReason::Length {
                    min: 1,
                    max: Self::MAX_LENGTH,
                },
            )),
        }
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert!(ItemName::parse(Some("a")).is_ok());
        assert!(ItemName::parse(Some(&"x".repeat(100))).is_ok());
    }

    #[test]
    fn test_parse_rejects_missing_empty_and_long() {
        for input in [None, Some(""), Some(&*"x".repeat(101))] {
            let err = ItemName::parse(input).unwrap_err();
            assert_eq!(err.to_string(), "name must be 1..100 chars");
        }
    }
}
