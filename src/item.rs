//! List item: trimmed, non-empty text

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ListError;

/// A single list entry.
///
/// Always trimmed and never empty. Two items with the same text are
/// indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Item(String);

impl Item {
    /// Trim `text` and wrap it, rejecting blank input
    pub fn new(text: &str) -> Result<Self, ListError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ListError::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Item {
    type Error = ListError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        // Skip the reallocation when the text is already trimmed
        if !text.is_empty() && text.trim().len() == text.len() {
            return Ok(Self(text));
        }
        Self::new(&text)
    }
}

impl From<Item> for String {
    fn from(item: Item) -> Self {
        item.0
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
