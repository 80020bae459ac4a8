//! Extension lifecycle and command dispatch
//!
//! An [`Extension`] owns the codec and the command registry. The host
//! activates it once, dispatches command ids to it, and deactivates it on
//! shutdown. Editor and notification services are passed in per invocation,
//! never stored.

mod builder;

pub use builder::ExtensionBuilder;

use log::{debug, info};
use serde_json::json;

use crate::codec::Base64Codec;
use crate::command::{CommandDescriptor, CommandRegistry, Operation, Outcome, TransformCommand};
use crate::config::Settings;
use crate::editor::EditorService;
use crate::error::{Error, Result};
use crate::notification::NotificationService;

/// Whether the extension accepts commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    /// Commands are not registered
    Inactive,
    /// Commands are registered and can be executed
    Active,
}

/// Extension options
#[derive(Debug, Clone)]
pub struct ExtensionOptions {
    /// Extension name, used in log messages
    pub name: String,
    /// Extension version
    pub version: String,
    /// Settings applied to the codec
    pub settings: Settings,
}

impl Default for ExtensionOptions {
    fn default() -> Self {
        Self {
            name: "One Base64".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            settings: Settings::default(),
        }
    }
}

/// The Base64 editor extension
pub struct Extension {
    options: ExtensionOptions,
    codec: Base64Codec,
    registry: CommandRegistry,
    state: ActivationState,
}

const OPERATIONS: [Operation; 2] = [Operation::Encode, Operation::Decode];

impl Extension {
    /// Create an inactive extension with the given options
    pub fn new(options: ExtensionOptions) -> Self {
        let codec = Base64Codec::with_options(options.settings.codec_options());
        Self {
            options,
            codec,
            registry: CommandRegistry::new(),
            state: ActivationState::Inactive,
        }
    }

    /// Start building an extension
    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::new()
    }

    /// Get the extension options
    pub fn options(&self) -> &ExtensionOptions {
        &self.options
    }

    /// Get the codec both commands transform with
    pub fn codec(&self) -> &Base64Codec {
        &self.codec
    }

    /// Get the activation state
    pub fn state(&self) -> ActivationState {
        self.state
    }

    /// Check whether commands can be executed
    pub fn is_active(&self) -> bool {
        self.state == ActivationState::Active
    }

    /// Register the encode and decode commands
    pub fn activate(&mut self) -> Result<()> {
        if self.is_active() {
            return Err(Error::AlreadyActive);
        }

        for operation in OPERATIONS {
            self.registry.register(operation.descriptor(), operation)?;
        }

        self.state = ActivationState::Active;
        info!("{} {} extension activated", self.options.name, self.options.version);
        Ok(())
    }

    /// Unregister all commands. Deactivating an inactive extension does nothing.
    pub fn deactivate(&mut self) {
        if !self.is_active() {
            return;
        }
        self.registry.clear();
        self.state = ActivationState::Inactive;
        info!("{} extension deactivated", self.options.name);
    }

    /// List the registered commands
    pub fn commands(&self) -> Vec<CommandDescriptor> {
        self.registry.descriptors()
    }

    /// Describe the commands this extension contributes to a host palette.
    /// Available before activation, since hosts read it to decide when to
    /// activate.
    pub fn contributions(&self) -> Result<serde_json::Value> {
        let commands = OPERATIONS
            .iter()
            .map(|operation| serde_json::to_value(operation.descriptor()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(json!({
            "commands": commands,
            "activationEvents": OPERATIONS
                .iter()
                .map(|operation| format!("onCommand:{}", operation.command_id()))
                .collect::<Vec<_>>(),
        }))
    }

    /// Execute the command registered under `id`
    pub fn execute_command<E, N>(&self, id: &str, editor: &mut E, notifier: &mut N) -> Result<Outcome>
    where
        E: EditorService + ?Sized,
        N: NotificationService + ?Sized,
    {
        if !self.is_active() {
            return Err(Error::NotActivated);
        }
        let operation = self.registry.get(id)?;
        debug!("Dispatching {} to {:?}", id, operation);
        Ok(TransformCommand::new(operation, &self.codec).execute(editor, notifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Utf8Policy;
    use crate::command::{DECODE_COMMAND_ID, ENCODE_COMMAND_ID};
    use crate::editor::{InMemoryEditor, TextDocument};
    use crate::notification::{NotificationLevel, NotificationLog};

    fn active_extension() -> Extension {
        let mut extension = Extension::builder().build();
        extension.activate().unwrap();
        extension
    }

    #[test]
    fn test_lifecycle() {
        let mut extension = Extension::builder().build();
        assert_eq!(extension.state(), ActivationState::Inactive);
        assert!(extension.commands().is_empty());

        extension.activate().unwrap();
        assert!(extension.is_active());
        assert_eq!(extension.commands().len(), 2);
        assert!(matches!(extension.activate(), Err(Error::AlreadyActive)));

        extension.deactivate();
        assert_eq!(extension.state(), ActivationState::Inactive);
        assert!(extension.commands().is_empty());
        extension.deactivate();

        extension.activate().unwrap();
        assert!(extension.is_active());
    }

    #[test]
    fn test_dispatch_requires_activation() {
        let mut extension = Extension::builder().build();
        let mut editor = InMemoryEditor::with_document(TextDocument::with_all_selected("Hello"));
        let mut notifications = NotificationLog::new();

        let result = extension.execute_command(ENCODE_COMMAND_ID, &mut editor, &mut notifications);
        assert!(matches!(result, Err(Error::NotActivated)));
        assert!(notifications.notifications().is_empty());

        extension.activate().unwrap();
        extension.deactivate();
        let result = extension.execute_command(ENCODE_COMMAND_ID, &mut editor, &mut notifications);
        assert!(matches!(result, Err(Error::NotActivated)));
        assert_eq!(editor.document().unwrap().text(), "Hello");
    }

    #[test]
    fn test_encode_then_decode_round_trip() {
        let extension = active_extension();
        let original = "multi-line\n✓ ünïcødé\0 text";
        let mut editor = InMemoryEditor::with_document(TextDocument::with_all_selected(original));
        let mut notifications = NotificationLog::new();

        let outcome = extension
            .execute_command(ENCODE_COMMAND_ID, &mut editor, &mut notifications)
            .unwrap();
        assert!(outcome.is_completed());
        assert_ne!(editor.document().unwrap().text(), original);

        let outcome = extension
            .execute_command(DECODE_COMMAND_ID, &mut editor, &mut notifications)
            .unwrap();
        assert!(outcome.is_completed());
        assert_eq!(editor.document().unwrap().text(), original);

        let levels: Vec<_> = notifications.notifications().iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NotificationLevel::Info, NotificationLevel::Info]);
    }

    #[test]
    fn test_unknown_command() {
        let extension = active_extension();
        let mut editor = InMemoryEditor::new();
        let mut notifications = NotificationLog::new();

        let result = extension.execute_command("base64Encoder.reverse", &mut editor, &mut notifications);
        assert!(matches!(result, Err(Error::UnknownCommand(_))));
        assert!(notifications.notifications().is_empty());
    }

    #[test]
    fn test_builder_settings_reach_codec() {
        let mut extension = Extension::builder()
            .with_implementation("test", "9.9.9")
            .with_utf8_policy(Utf8Policy::Strict)
            .build();
        extension.activate().unwrap();
        assert_eq!(extension.options().version, "9.9.9");
        assert_eq!(extension.codec().options().utf8_policy, Utf8Policy::Strict);

        let mut editor = InMemoryEditor::with_document(TextDocument::with_all_selected("/w=="));
        let mut notifications = NotificationLog::new();
        let outcome = extension
            .execute_command(DECODE_COMMAND_ID, &mut editor, &mut notifications)
            .unwrap();
        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_eq!(editor.document().unwrap().text(), "/w==");
        assert_eq!(notifications.last().unwrap().level, NotificationLevel::Error);
    }

    #[test]
    fn test_contributions() {
        let extension = Extension::builder().build();
        let contributions = extension.contributions().unwrap();
        assert_eq!(
            contributions,
            json!({
                "commands": [
                    { "command": "base64Encoder.encode", "title": "Encode to Base64", "category": "Base64" },
                    { "command": "base64Encoder.decode", "title": "Decode from Base64", "category": "Base64" }
                ],
                "activationEvents": [
                    "onCommand:base64Encoder.encode",
                    "onCommand:base64Encoder.decode"
                ]
            })
        );
    }
}
