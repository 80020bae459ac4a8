//! Text codecs
//!
//! This module defines the encode/decode capabilities a command transforms
//! the selection with, and the Base64 implementation of them.

mod base64;

pub use self::base64::Base64Codec;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Turns text into its encoded form. Encoding never fails.
pub trait Encoder {
    /// Encode `text`
    fn encode(&self, text: &str) -> String;
}

/// Turns encoded text back into the original text.
pub trait Decoder {
    /// Decode `encoded`
    fn decode(&self, encoded: &str) -> Result<String, CodecError>;
}

/// A codec supports both directions.
pub trait Codec: Encoder + Decoder {}

impl<T: Encoder + Decoder + ?Sized> Codec for T {}

/// What to do when decoded bytes are not valid UTF-8
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Utf8Policy {
    /// Reject the input
    Strict,
    /// Replace invalid sequences with U+FFFD
    #[default]
    Lossy,
}

/// The 64-symbol alphabet used for both directions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /`
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`
    UrlSafe,
}

/// Options controlling how a [`Base64Codec`] encodes and decodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Alphabet for both directions
    pub alphabet: Alphabet,
    /// UTF-8 policy applied after decoding
    pub utf8_policy: Utf8Policy,
    /// Strip ASCII whitespace before decoding
    pub ignore_whitespace: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Standard,
            utf8_policy: Utf8Policy::Lossy,
            ignore_whitespace: true,
        }
    }
}
