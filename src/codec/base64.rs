//! Base64 encoding and decoding of editor text
//!
//! Text is encoded as its UTF-8 bytes. Decoding requires canonical padding
//! and zero trailing bits, so only strings `encode` could have produced
//! (modulo whitespace, when tolerated) are accepted.

use ::base64::engine::general_purpose::{STANDARD, URL_SAFE};
use ::base64::engine::GeneralPurpose;
use ::base64::Engine as _;

use super::{Alphabet, CodecOptions, Decoder, Encoder, Utf8Policy};
use crate::error::CodecError;

/// Base64 codec over UTF-8 text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64Codec {
    options: CodecOptions,
}

impl Base64Codec {
    /// Create a codec with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with the given options
    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Get the options of this codec
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    fn engine(&self) -> &'static GeneralPurpose {
        match self.options.alphabet {
            Alphabet::Standard => &STANDARD,
            Alphabet::UrlSafe => &URL_SAFE,
        }
    }
}

impl Encoder for Base64Codec {
    fn encode(&self, text: &str) -> String {
        self.engine().encode(text.as_bytes())
    }
}

impl Decoder for Base64Codec {
    fn decode(&self, encoded: &str) -> Result<String, CodecError> {
        let decoded = if self.options.ignore_whitespace {
            let compact: String = encoded
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            self.engine().decode(compact)
        } else {
            self.engine().decode(encoded)
        };
        let bytes = decoded.map_err(|e| CodecError::InvalidBase64(e.to_string()))?;

        match self.options.utf8_policy {
            Utf8Policy::Strict => {
                String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8(e.to_string()))
            }
            Utf8Policy::Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}
