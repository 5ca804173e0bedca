//! Per-line decoding of input bytes
//!
//! Lines are cut on the raw `\n` byte before decoding, so only encodings in
//! which that byte always means newline are accepted.

use crate::config::DecodePolicy;
use crate::error::{Result, SplitError};
use encoding_rs::{DecoderResult, Encoding};
use std::borrow::Cow;

/// A decoded line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine<'a> {
    /// Line text, terminator included
    pub text: Cow<'a, str>,
    /// Whether invalid input was replaced or dropped
    pub altered: bool,
}

/// Decodes raw input lines to UTF-8 under a [`DecodePolicy`]
#[derive(Debug, Clone, Copy)]
pub struct LineDecoder {
    encoding: &'static Encoding,
    policy: DecodePolicy,
}

impl LineDecoder {
    /// Resolve `label` (e.g. `"utf-8"`, `"latin1"`, `"shift_jis"`)
    pub fn new(label: &str, policy: DecodePolicy) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            SplitError::InvalidConfig(format!("unknown encoding label '{label}'"))
        })?;

        if !encoding.is_ascii_compatible() {
            return Err(SplitError::InvalidConfig(format!(
                "encoding {} cannot be split on line boundaries",
                encoding.name()
            )));
        }

        Ok(Self { encoding, policy })
    }

    /// Canonical name of the resolved encoding
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// The policy this decoder applies
    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Decode one line. Returns `None` when the line is invalid and the
    /// policy is [`DecodePolicy::Strict`].
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<DecodedLine<'a>> {
        if let Some(text) = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
        {
            return Some(DecodedLine {
                text,
                altered: false,
            });
        }

        match self.policy {
            DecodePolicy::Strict => None,
            DecodePolicy::Replace => {
                let (text, _) = self.encoding.decode_without_bom_handling(bytes);
                Some(DecodedLine {
                    text,
                    altered: true,
                })
            }
            DecodePolicy::Ignore => Some(DecodedLine {
                text: Cow::Owned(self.decode_dropping_malformed(bytes)),
                altered: true,
            }),
        }
    }

    fn decode_dropping_malformed(&self, bytes: &[u8]) -> String {
        let mut decoder = self.encoding.new_decoder_without_bom_handling();
        let mut out = String::with_capacity(bytes.len());
        let mut src = bytes;

        loop {
            let needed = decoder
                .max_utf8_buffer_length_without_replacement(src.len())
                .unwrap_or(src.len() * 3 + 4);
            out.reserve(needed);

            let (result, read) = decoder.decode_to_string_without_replacement(src, &mut out, true);
            src = &src[read..];

            match result {
                DecoderResult::InputEmpty => break,
                // Malformed bytes are already consumed; keep going past them.
                DecoderResult::Malformed(_, _) | DecoderResult::OutputFull => continue,
            }
        }

        out
    }
}
