//! Presentation helpers
//!
//! DOM-free pieces of the page: filter matching, the item counter label and
//! user-facing messages. The wasm entry point applies these to the DOM.

use crate::error::ListError;
use crate::item::Item;

/// Shown when the add form is submitted with blank text
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter an item!";

/// Asked before a row is deleted
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Case-insensitive substring match. An empty filter matches everything.
pub fn matches_filter(text: &str, filter: &str) -> bool {
    text.to_lowercase().contains(&filter.to_lowercase())
}

/// Visibility of each row under `filter`, in list order
pub fn visible_rows(items: &[Item], filter: &str) -> Vec<bool> {
    let needle = filter.to_lowercase();
    items
        .iter()
        .map(|item| item.as_str().to_lowercase().contains(&needle))
        .collect()
}

/// Counter text, e.g. "1 item" / "3 items"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Whether the "list is empty" placeholder should be shown
pub fn show_empty_state(count: usize) -> bool {
    count == 0
}

/// Alert text for an error, `None` if it should only be logged
pub fn alert_message(err: &ListError) -> Option<String> {
    let message = match err {
        ListError::EmptyInput => EMPTY_INPUT_MESSAGE,
        ListError::Storage { .. } => "Could not save your list.",
        ListError::CorruptState { .. } => "Your saved list could not be read.",
        ListError::IndexOutOfRange { .. } => "That item is no longer in the list.",
        ListError::StorageUnavailable => "This browser does not allow saving the list.",
        // Bad settings fall back to defaults
        ListError::Settings(_) => return None,
    };
    Some(message.to_string())
}
