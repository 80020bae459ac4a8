//! Builder for configuring and creating extensions

use super::{Extension, ExtensionOptions};
use crate::codec::{Alphabet, Utf8Policy};
use crate::config::Settings;

/// Builder for creating and configuring extensions
#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    /// Extension options
    options: ExtensionOptions,
}

impl ExtensionBuilder {
    /// Create a new extension builder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extension name and version
    pub fn with_implementation(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.options.name = name.into();
        self.options.version = version.into();
        self
    }

    /// Replace all settings
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.options.settings = settings;
        self
    }

    /// Set the alphabet used by both commands
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.options.settings.alphabet = alphabet;
        self
    }

    /// Set the UTF-8 policy applied after decoding
    pub fn with_utf8_policy(mut self, policy: Utf8Policy) -> Self {
        self.options.settings.decode.utf8_policy = policy;
        self
    }

    /// Set whether whitespace is stripped before decoding
    pub fn with_ignore_whitespace(mut self, enable: bool) -> Self {
        self.options.settings.decode.ignore_whitespace = enable;
        self
    }

    /// Build the extension. It still has to be activated.
    pub fn build(self) -> Extension {
        Extension::new(self.options)
    }
}
