use std::fmt;

use super::charset::SafeCharSet;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Escapes every character outside a [`SafeCharSet`] as `%HH` triples of its UTF-8 bytes.
///
/// An encoder holds no state besides its safe set, so one instance can be shared by any
/// number of threads. See [`crate::encoding::profiles`] for the prebuilt URL component
/// encoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PercentEncoder {
    safe: SafeCharSet,
}

impl PercentEncoder {
    pub const fn new(safe: SafeCharSet) -> PercentEncoder {
        PercentEncoder { safe }
    }

    pub const fn safe_chars(&self) -> SafeCharSet {
        self.safe
    }

    /// Percent-encode `input` into a new string.
    ///
    /// Safe characters are copied, everything else becomes the uppercase `%HH` escapes of
    /// its UTF-8 encoding (1 to 4 triples per code point).
    pub fn encode(&self, input: &str) -> String {
        let mut out = String::with_capacity(self.encoded_len(input));
        // Writing into a String cannot fail.
        let _ = self.encode_to(input, &mut out);
        out
    }

    /// Percent-encode `input` into `out`.
    ///
    /// Runs of safe characters are written as a single slice. The only possible error is
    /// one reported by `out` itself.
    pub fn encode_to<W: fmt::Write>(&self, input: &str, out: &mut W) -> fmt::Result {
        let mut safe_start = 0;

        for (idx, c) in input.char_indices() {
            if self.safe.contains(c) {
                continue;
            }

            if safe_start < idx {
                out.write_str(&input[safe_start..idx])?;
            }
            safe_start = idx + c.len_utf8();

            let mut utf8 = [0u8; 4];
            for &b in c.encode_utf8(&mut utf8).as_bytes() {
                out.write_char('%')?;
                out.write_char(HEX[(b >> 4) as usize] as char)?;
                out.write_char(HEX[(b & 0x0F) as usize] as char)?;
            }
        }

        if safe_start < input.len() {
            out.write_str(&input[safe_start..])?;
        }

        Ok(())
    }

    /// Exact length in bytes of `self.encode(input)`.
    pub fn encoded_len(&self, input: &str) -> usize {
        input
            .chars()
            .map(|c| {
                if self.safe.contains(c) {
                    1
                } else {
                    3 * c.len_utf8()
                }
            })
            .sum()
    }

    /// Wraps `input` so that formatting it writes the encoded form.
    ///
    /// ```
    /// use url_percent_codec::encoding::EncoderProfile;
    ///
    /// let path = EncoderProfile::PathSegment.encoder();
    /// assert_eq!(format!("/files/{}", path.display("a b;c")), "/files/a%20b%3Bc");
    /// ```
    pub fn display<'a>(&'a self, input: &'a str) -> Encoded<'a> {
        Encoded {
            encoder: self,
            input,
        }
    }
}

/// Lazily percent-encoded text, see [`PercentEncoder::display`].
#[derive(Clone, Copy, Debug)]
pub struct Encoded<'a> {
    encoder: &'a PercentEncoder,
    input: &'a str,
}

impl fmt::Display for Encoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encoder.encode_to(self.input, f)
    }
}
