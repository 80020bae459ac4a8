//! In-memory editor
//!
//! A single text document with at most one selection. Hosts without a real
//! editor (the terminal binary, tests) drive commands through it.

use std::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

use super::EditorService;
use crate::error::{Error, Result};

/// A contiguous byte range of a document
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Selection {
    /// Create a selection covering `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check whether the selection covers no text
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the selection as a byte range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A text document with an optional selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    selection: Option<Selection>,
}

impl TextDocument {
    /// Create a document without a selection
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: None,
        }
    }

    /// Create a document whose whole text is selected
    pub fn with_all_selected(text: impl Into<String>) -> Self {
        let text = text.into();
        let selection = Some(Selection::new(0, text.len()));
        Self { text, selection }
    }

    /// Get the full document text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the current selection
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Select `selection`, which must lie on character boundaries
    pub fn select(&mut self, selection: Selection) -> Result<()> {
        if selection.start > selection.end
            || !self.text.is_char_boundary(selection.start)
            || !self.text.is_char_boundary(selection.end)
        {
            return Err(Error::InvalidSelection(format!(
                "{}..{} in a document of {} bytes",
                selection.start,
                selection.end,
                self.text.len()
            )));
        }
        self.selection = Some(selection);
        Ok(())
    }

    /// Drop the selection
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Get the selected text, if any
    pub fn selected_text(&self) -> Option<&str> {
        self.selection.map(|s| &self.text[s.range()])
    }

    /// Replace the selected range with `text`. The new text becomes the
    /// selection. Does nothing without a selection.
    pub fn replace_selection(&mut self, text: &str) {
        let Some(selection) = self.selection else {
            return;
        };
        self.text.replace_range(selection.range(), text);
        self.selection = Some(Selection::new(
            selection.start,
            selection.start + text.len(),
        ));
    }
}

/// An editor holding at most one focused document
#[derive(Debug, Clone, Default)]
pub struct InMemoryEditor {
    document: Option<TextDocument>,
}

impl InMemoryEditor {
    /// Create an editor with no focused document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor focused on `document`
    pub fn with_document(document: TextDocument) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Get the focused document
    pub fn document(&self) -> Option<&TextDocument> {
        self.document.as_ref()
    }

    /// Get the focused document mutably
    pub fn document_mut(&mut self) -> Option<&mut TextDocument> {
        self.document.as_mut()
    }

    /// Close the focused document, returning it
    pub fn close(&mut self) -> Option<TextDocument> {
        self.document.take()
    }
}

impl EditorService for InMemoryEditor {
    fn is_editor_active(&self) -> bool {
        self.document.is_some()
    }

    fn selected_text(&self) -> Option<String> {
        self.document
            .as_ref()
            .and_then(|d| d.selected_text())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }

    fn replace_selection(&mut self, text: &str) {
        if let Some(document) = self.document.as_mut() {
            debug!("Replacing selection {:?} with {} bytes", document.selection(), text.len());
            document.replace_selection(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_only_touches_selection() {
        let mut document = TextDocument::new("key: Hello;");
        document.select(Selection::new(5, 10)).unwrap();
        assert_eq!(document.selected_text(), Some("Hello"));

        document.replace_selection("SGVsbG8=");
        assert_eq!(document.text(), "key: SGVsbG8=;");
        assert_eq!(document.selection(), Some(Selection::new(5, 13)));
        assert_eq!(document.selected_text(), Some("SGVsbG8="));
    }

    #[test]
    fn test_replace_without_selection_is_a_no_op() {
        let mut document = TextDocument::new("untouched");
        document.replace_selection("x");
        assert_eq!(document.text(), "untouched");
    }

    #[test]
    fn test_select_rejects_bad_ranges() {
        let mut document = TextDocument::new("日本");
        assert!(document.select(Selection::new(0, 3)).is_ok());
        assert!(document.select(Selection::new(0, 1)).is_err());
        assert!(document.select(Selection::new(3, 0)).is_err());
        assert!(document.select(Selection::new(0, 7)).is_err());
    }

    #[test]
    fn test_editor_service() {
        let mut editor = InMemoryEditor::new();
        assert!(!editor.is_editor_active());
        assert_eq!(editor.selected_text(), None);

        editor = InMemoryEditor::with_document(TextDocument::new("abc"));
        assert!(editor.is_editor_active());
        assert_eq!(editor.selected_text(), None);

        editor
            .document_mut()
            .unwrap()
            .select(Selection::new(1, 1))
            .unwrap();
        assert_eq!(editor.selected_text(), None);

        editor = InMemoryEditor::with_document(TextDocument::with_all_selected("abc"));
        assert_eq!(editor.selected_text().as_deref(), Some("abc"));
        editor.replace_selection("xyz");
        assert_eq!(editor.document().unwrap().text(), "xyz");

        assert!(editor.close().is_some());
        assert!(!editor.is_editor_active());
    }
}
