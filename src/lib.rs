//! # One Base64: Base64 commands for code editors
//!
//! `one_base64` implements the core of an editor extension with two
//! commands: encode the selected text to Base64, and decode selected Base64
//! text back. Each command checks that an editor is active, reads the
//! selection, transforms it, writes the result over the selection and shows
//! exactly one notification describing the outcome.
//!
//! ## Features
//!
//! - Standard and URL-safe Base64 over UTF-8 text
//! - Strict or lossy handling of decoded bytes that are not UTF-8
//! - Editor and notification access through small traits, so any host can
//!   drive the commands
//! - An in-memory editor and a recording notifier for hosts without a UI
//! - JSON settings
//!
//! ## Example
//!
//! ```
//! use one_base64::{Extension, InMemoryEditor, NotificationLog, TextDocument};
//! use one_base64::command::ENCODE_COMMAND_ID;
//!
//! let mut extension = Extension::builder().build();
//! extension.activate().unwrap();
//!
//! let mut editor = InMemoryEditor::with_document(TextDocument::with_all_selected("Hello"));
//! let mut notifications = NotificationLog::new();
//! let outcome = extension
//!     .execute_command(ENCODE_COMMAND_ID, &mut editor, &mut notifications)
//!     .unwrap();
//!
//! assert!(outcome.is_completed());
//! assert_eq!(editor.document().unwrap().text(), "SGVsbG8=");
//! ```

pub mod codec;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod extension;
pub mod notification;

// Re-export commonly used types for convenience
pub use codec::{Base64Codec, Codec, CodecOptions, Decoder, Encoder};
pub use command::{Operation, Outcome, TransformCommand};
pub use config::Settings;
pub use editor::{EditorService, InMemoryEditor, TextDocument};
pub use error::{CodecError, CommandError, Error};
pub use extension::{Extension, ExtensionBuilder};
pub use notification::{LogNotifier, NotificationLog, NotificationService};
