//! Editor access
//!
//! Commands never look up the host editor themselves; they receive an
//! [`EditorService`] and only ever use the three operations below.

mod document;

pub use document::{InMemoryEditor, Selection, TextDocument};

/// The editor operations a text transform command needs
#[cfg_attr(test, mockall::automock)]
pub trait EditorService {
    /// Check whether an editable document currently has focus
    fn is_editor_active(&self) -> bool;

    /// Get the currently selected text, or `None` when nothing is selected
    fn selected_text(&self) -> Option<String>;

    /// Replace the currently selected range with `text`
    fn replace_selection(&mut self, text: &str);
}
