//! Text transform commands
//!
//! Encode and decode share one orchestration, [`run_transform`]: check the
//! editor, read the selection, transform it, write it back and report the
//! outcome. The variants only differ in the codec direction and in the
//! messages shown to the user.

mod registry;

pub use registry::{CommandDescriptor, CommandRegistry};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::codec::Codec;
use crate::editor::EditorService;
use crate::error::{CodecError, CommandError};
use crate::notification::NotificationService;

/// Command id of the encode command
pub const ENCODE_COMMAND_ID: &str = "base64Encoder.encode";
/// Command id of the decode command
pub const DECODE_COMMAND_ID: &str = "base64Encoder.decode";

/// Category the commands are listed under in a command palette
pub const COMMAND_CATEGORY: &str = "Base64";

/// The user-facing strings of one command variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMessages {
    /// Warning shown when nothing is selected
    pub empty_selection: String,
    /// Info shown after the selection was replaced
    pub success: String,
    /// Prefix of the error shown when the transform fails
    pub error_prefix: String,
}

impl CommandMessages {
    /// Create a new set of messages
    pub fn new(
        empty_selection: impl Into<String>,
        success: impl Into<String>,
        error_prefix: impl Into<String>,
    ) -> Self {
        Self {
            empty_selection: empty_selection.into(),
            success: success.into(),
            error_prefix: error_prefix.into(),
        }
    }
}

/// Which direction a command transforms the selection in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Text to Base64
    Encode,
    /// Base64 to text
    Decode,
}

impl Operation {
    /// Get the command id this operation is registered under
    pub fn command_id(&self) -> &'static str {
        match self {
            Self::Encode => ENCODE_COMMAND_ID,
            Self::Decode => DECODE_COMMAND_ID,
        }
    }

    /// Get the palette title of this operation
    pub fn title(&self) -> &'static str {
        match self {
            Self::Encode => "Encode to Base64",
            Self::Decode => "Decode from Base64",
        }
    }

    /// Get the messages shown by this operation
    pub fn messages(&self) -> CommandMessages {
        match self {
            Self::Encode => CommandMessages::new(
                "Please select text to encode",
                "Text encoded to Base64",
                "Encoding failed",
            ),
            Self::Decode => CommandMessages::new(
                "Please select Base64 text to decode",
                "Base64 decoded to text",
                "Decoding failed",
            ),
        }
    }

    /// Get the palette descriptor of this operation
    pub fn descriptor(&self) -> CommandDescriptor {
        CommandDescriptor::new(self.command_id(), self.title(), COMMAND_CATEGORY)
    }

    /// Apply this operation to `text` with `codec`
    pub fn apply<C: Codec + ?Sized>(&self, codec: &C, text: &str) -> Result<String, CodecError> {
        match self {
            Self::Encode => Ok(codec.encode(text)),
            Self::Decode => codec.decode(text),
        }
    }
}

/// How a command invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The selection was replaced
    Completed,
    /// The command stopped before transforming anything
    Aborted(CommandError),
    /// The transform rejected the selection
    Failed(CommandError),
}

impl Outcome {
    /// Check whether the selection was replaced
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Get the reason the command did not complete
    pub fn error(&self) -> Option<&CommandError> {
        match self {
            Self::Completed => None,
            Self::Aborted(err) | Self::Failed(err) => Some(err),
        }
    }
}

/// Run one transform against the active editor and report the outcome.
///
/// Exactly one notification is shown per call. The editor is only written to
/// when the transform succeeds.
pub fn run_transform<E, N, F>(
    editor: &mut E,
    notifier: &mut N,
    messages: &CommandMessages,
    transform: F,
) -> Outcome
where
    E: EditorService + ?Sized,
    N: NotificationService + ?Sized,
    F: FnOnce(&str) -> Result<String, CodecError>,
{
    match try_transform(editor, messages, transform) {
        Ok(()) => {
            debug!("Selection replaced");
            notifier.show_info(&messages.success);
            Outcome::Completed
        }
        Err(CommandError::TransformFailure(cause)) => {
            debug!("Transform rejected the selection");
            notifier.show_error(&format!("{}: {}", messages.error_prefix, cause));
            Outcome::Failed(CommandError::TransformFailure(cause))
        }
        Err(err @ CommandError::NoActiveEditor) => {
            debug!("No active editor, aborting");
            notifier.show_error(&err.to_string());
            Outcome::Aborted(err)
        }
        Err(err @ CommandError::EmptySelection(_)) => {
            debug!("Nothing selected, aborting");
            notifier.show_warning(&err.to_string());
            Outcome::Aborted(err)
        }
    }
}

fn try_transform<E, F>(
    editor: &mut E,
    messages: &CommandMessages,
    transform: F,
) -> Result<(), CommandError>
where
    E: EditorService + ?Sized,
    F: FnOnce(&str) -> Result<String, CodecError>,
{
    if !editor.is_editor_active() {
        return Err(CommandError::NoActiveEditor);
    }

    let selected = editor
        .selected_text()
        .filter(|text| !text.is_empty())
        .ok_or_else(|| CommandError::EmptySelection(messages.empty_selection.clone()))?;
    debug!("Transforming selection of {} bytes", selected.len());

    let transformed = transform(&selected)?;
    editor.replace_selection(&transformed);
    Ok(())
}

/// An operation bound to the codec it transforms with
pub struct TransformCommand<'a, C: Codec + ?Sized> {
    operation: Operation,
    codec: &'a C,
}

impl<'a, C: Codec + ?Sized> TransformCommand<'a, C> {
    /// Create a new command
    pub fn new(operation: Operation, codec: &'a C) -> Self {
        Self { operation, codec }
    }

    /// Get the operation of this command
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Execute the command against `editor`, reporting through `notifier`
    pub fn execute<E, N>(&self, editor: &mut E, notifier: &mut N) -> Outcome
    where
        E: EditorService + ?Sized,
        N: NotificationService + ?Sized,
    {
        debug!("Executing command {}", self.operation.command_id());
        let messages = self.operation.messages();
        run_transform(editor, notifier, &messages, |text| {
            self.operation.apply(self.codec, text)
        })
    }
}
