//! Extension settings
//!
//! Settings are read from JSON, the format editor hosts store configuration
//! in. Missing fields take their defaults; unknown fields are rejected so a
//! misspelt key does not silently fall back to a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::{Alphabet, CodecOptions, Utf8Policy};
use crate::error::{Error, Result};

/// Decoding settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DecodeSettings {
    /// What to do with decoded bytes that are not UTF-8
    pub utf8_policy: Utf8Policy,
    /// Strip whitespace from the selection before decoding
    pub ignore_whitespace: bool,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        let options = CodecOptions::default();
        Self {
            utf8_policy: options.utf8_policy,
            ignore_whitespace: options.ignore_whitespace,
        }
    }
}

/// All extension settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Alphabet used by both commands
    pub alphabet: Alphabet,
    /// Decoding settings
    pub decode: DecodeSettings,
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigError(format!("Invalid settings: {}", e)))
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::IoError(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    /// Get the codec options these settings describe
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            alphabet: self.alphabet,
            utf8_policy: self.decode.utf8_policy,
            ignore_whitespace: self.decode.ignore_whitespace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.codec_options(), CodecOptions::default());
        assert_eq!(settings.decode.utf8_policy, Utf8Policy::Lossy);
        assert!(settings.decode.ignore_whitespace);
    }

    #[test]
    fn test_partial_settings() {
        let settings = Settings::from_json_str(r#"{ "decode": { "utf8Policy": "strict" } }"#).unwrap();
        assert_eq!(settings.alphabet, Alphabet::Standard);
        assert_eq!(settings.decode.utf8_policy, Utf8Policy::Strict);
        assert!(settings.decode.ignore_whitespace);
    }

    #[test]
    fn test_full_settings() {
        let settings = Settings::from_json_str(
            r#"{
                "alphabet": "url_safe",
                "decode": { "utf8Policy": "strict", "ignoreWhitespace": false }
            }"#,
        )
        .unwrap();
        let options = settings.codec_options();
        assert_eq!(options.alphabet, Alphabet::UrlSafe);
        assert_eq!(options.utf8_policy, Utf8Policy::Strict);
        assert!(!options.ignore_whitespace);
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(
            Settings::from_json_str(r#"{ "decode": { "utf8Policy": "sloppy" } }"#),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            Settings::from_json_str(r#"{ "alphabit": "standard" }"#),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(Settings::from_json_str("not json"), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "decode": {{ "ignoreWhitespace": false }} }}"#).unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert!(!settings.decode.ignore_whitespace);

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Settings::from_file(dir.path().join("missing.json")),
            Err(Error::IoError(_))
        ));
    }
}
