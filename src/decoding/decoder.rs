use log::{debug, trace};

use super::error::DecodeError;

const DEFAULT_PENDING_CAPACITY: usize = 16;

/// Turns `%HH` escapes back into text, reading consecutive escapes as one UTF-8 byte run.
///
/// Decoding is strict: a dangling `%`, a non-hex escape or an escaped byte run that is not
/// valid UTF-8 fails the whole call, and no partial output is produced. Characters that
/// are not part of an escape are copied through unchanged, `+` included.
///
/// The decoder keeps no state between calls, so a single instance may be shared between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentDecoder {
    pending_capacity: usize,
}

/// Where the scanner is relative to the current `%` escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    /// Just read the `%` at `start`.
    ReadingHex1 { start: usize },
    /// Read the `%` at `start` and the character after it.
    ReadingHex2 { start: usize, high: char },
}

/// Bytes of the current run of escapes, not yet checked for UTF-8 validity.
struct PendingBytes {
    bytes: Vec<u8>,
    /// Position of the `%` that started the run.
    start: usize,
}

impl PendingBytes {
    fn push(&mut self, position: usize, byte: u8) {
        if self.bytes.is_empty() {
            self.start = position;
        }
        self.bytes.push(byte);
    }

    fn flush(&mut self, out: &mut String) -> Result<(), DecodeError> {
        if self.bytes.is_empty() {
            return Ok(());
        }

        trace!("decoding {} escaped bytes from position {}", self.bytes.len(), self.start);
        match std::str::from_utf8(&self.bytes) {
            Ok(decoded) => out.push_str(decoded),
            Err(e) => return Err(DecodeError::invalid_utf8(&self.bytes, self.start, e)),
        }
        self.bytes.clear();

        Ok(())
    }
}

impl Default for PercentDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PercentDecoder {
    pub const fn new() -> PercentDecoder {
        Self::with_capacity(DEFAULT_PENDING_CAPACITY)
    }

    /// `capacity` is the number of escaped bytes buffered before the pending run has to grow.
    pub const fn with_capacity(capacity: usize) -> PercentDecoder {
        PercentDecoder {
            pending_capacity: capacity,
        }
    }

    pub fn decode(&self, input: &str) -> Result<String, DecodeError> {
        let mut out = String::with_capacity(input.len());
        self.decode_into(input, &mut out)?;
        Ok(out)
    }

    /// Decode `input` and append the result to `out`.
    ///
    /// On error `out` is left as it was before the call.
    pub fn decode_into(&self, input: &str, out: &mut String) -> Result<(), DecodeError> {
        let original_len = out.len();

        let result = self.run(input, out);
        if let Err(e) = &result {
            debug!("percent decoding failed at position {}: {}", e.position(), e);
            out.truncate(original_len);
        }

        result
    }

    fn run(&self, input: &str, out: &mut String) -> Result<(), DecodeError> {
        let mut pending = PendingBytes {
            bytes: Vec::with_capacity(self.pending_capacity),
            start: 0,
        };
        let mut state = State::Scanning;

        for (idx, c) in input.char_indices() {
            state = match state {
                State::Scanning if c == '%' => State::ReadingHex1 { start: idx },
                State::Scanning => {
                    pending.flush(out)?;
                    out.push(c);
                    State::Scanning
                }
                State::ReadingHex1 { start } => State::ReadingHex2 { start, high: c },
                State::ReadingHex2 { start, high } => {
                    match (high.to_digit(16), c.to_digit(16)) {
                        (Some(h), Some(l)) => pending.push(start, ((h << 4) | l) as u8),
                        _ => {
                            return Err(DecodeError::InvalidTuple {
                                tuple: input[start..idx + c.len_utf8()].to_string(),
                                position: start,
                            })
                        }
                    }
                    State::Scanning
                }
            };
        }

        match state {
            State::Scanning => pending.flush(out),
            State::ReadingHex1 { start } | State::ReadingHex2 { start, .. } => {
                Err(DecodeError::IncompletePair {
                    input: input.to_string(),
                    position: start,
                })
            }
        }
    }
}

/// Decode `input` with a default [`PercentDecoder`].
pub fn decode(input: &str) -> Result<String, DecodeError> {
    PercentDecoder::new().decode(input)
}
