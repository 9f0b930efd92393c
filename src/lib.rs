//! Percent-encoding and decoding for the individual components of a URL.
//!
//! Each URL component has its own set of characters that may appear unescaped; pick the
//! matching [`EncoderProfile`] and encode the raw text with it. [`PercentDecoder`] reverses
//! any such encoding, reading runs of escapes as UTF-8.
//!
//! ```
//! use url_percent_codec::{decode, EncoderProfile};
//!
//! let encoded = EncoderProfile::QueryParamValue.encoder().encode("fish & chips");
//! assert_eq!(encoded, "fish%20%26%20chips");
//! assert_eq!(decode(&encoded).unwrap(), "fish & chips");
//! ```

pub mod decoding;
pub mod encoding;

pub use decoding::{decode, DecodeError, PercentDecoder};
pub use encoding::{encoder_for, EncoderProfile, PercentEncoder, SafeCharSet};
