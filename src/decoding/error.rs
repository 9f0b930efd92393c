use std::str::Utf8Error;

use thiserror::Error;

/// Percent decoding failed. Positions are 0-based offsets into the decoded input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` without two characters after it.
    #[error("Could not percent decode <{input}>: incomplete %-pair at position {position}")]
    IncompletePair { input: String, position: usize },

    /// A `%` followed by something other than two hex digits.
    #[error("Invalid %-tuple <{tuple}>")]
    InvalidTuple { tuple: String, position: usize },

    /// A run of escapes that does not form valid UTF-8.
    ///
    /// `escaped` is the run as `%HH` triples and `position` points at its first `%`.
    #[error("Invalid UTF-8 in %-encoded bytes <{escaped}> at position {position}: {source}")]
    InvalidUtf8 {
        escaped: String,
        position: usize,
        #[source]
        source: Utf8Error,
    },
}

impl DecodeError {
    pub fn position(&self) -> usize {
        match self {
            DecodeError::IncompletePair { position, .. }
            | DecodeError::InvalidTuple { position, .. }
            | DecodeError::InvalidUtf8 { position, .. } => *position,
        }
    }

    pub(crate) fn invalid_utf8(bytes: &[u8], position: usize, source: Utf8Error) -> DecodeError {
        let escaped = bytes
            .iter()
            .map(|b| format!("%{}", hex::encode_upper([*b])))
            .collect();

        DecodeError::InvalidUtf8 {
            escaped,
            position,
            source,
        }
    }
}
