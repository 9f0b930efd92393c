//! Prebuilt encoders, one per URL component.
//!
//! See RFC 3986 Appendix A, RFC 1738 §3.3 for matrix parameters and HTML 4 §17.13.4.1
//! for `+` in queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::charset::{self, SafeCharSet};
use super::encoder::PercentEncoder;

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
///
/// Not very aggressive: DNS-illegal names still get through, but the result is a valid URI.
pub const REG_NAME_CHARS: SafeCharSet = charset::UNRESERVED.union(charset::SUB_DELIMS);

/// RFC 3986 `userinfo` without `:`, which separates the user name from the password.
pub const USER_INFO_CHARS: SafeCharSet = charset::UNRESERVED.union(charset::SUB_DELIMS);

/// `pchar` without `;`, which starts the matrix parameters of a segment.
pub const PATH_SEGMENT_CHARS: SafeCharSet = charset::PCHAR.without(b';');

/// `pchar` without the matrix parameter delimiters `;` and `=`.
pub const MATRIX_PARAM_CHARS: SafeCharSet = charset::PCHAR.without(b';').without(b'=');

/// `query` without `+`, which form decoders read as a space.
pub const UNSTRUCTURED_QUERY_CHARS: SafeCharSet = charset::QUERY.without(b'+');

/// Unstructured query without the `key=value&...` delimiters.
pub const QUERY_PARAM_CHARS: SafeCharSet = UNSTRUCTURED_QUERY_CHARS.without(b'=').without(b'&');

pub const FRAGMENT_CHARS: SafeCharSet = charset::FRAGMENT;

pub static USER_INFO: PercentEncoder = PercentEncoder::new(USER_INFO_CHARS);
pub static REG_NAME: PercentEncoder = PercentEncoder::new(REG_NAME_CHARS);
pub static PATH_SEGMENT: PercentEncoder = PercentEncoder::new(PATH_SEGMENT_CHARS);
pub static MATRIX_PARAM: PercentEncoder = PercentEncoder::new(MATRIX_PARAM_CHARS);
pub static QUERY_PARAM_NAME: PercentEncoder = PercentEncoder::new(QUERY_PARAM_CHARS);
pub static QUERY_PARAM_VALUE: PercentEncoder = PercentEncoder::new(QUERY_PARAM_CHARS);
pub static UNSTRUCTURED_QUERY: PercentEncoder = PercentEncoder::new(UNSTRUCTURED_QUERY_CHARS);
pub static FRAGMENT: PercentEncoder = PercentEncoder::new(FRAGMENT_CHARS);

/// The URL component a piece of text is destined for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderProfile {
    UserInfo,
    RegName,
    PathSegment,
    MatrixParam,
    QueryParamName,
    QueryParamValue,
    UnstructuredQuery,
    Fragment,
}

impl EncoderProfile {
    pub const ALL: [EncoderProfile; 8] = [
        EncoderProfile::UserInfo,
        EncoderProfile::RegName,
        EncoderProfile::PathSegment,
        EncoderProfile::MatrixParam,
        EncoderProfile::QueryParamName,
        EncoderProfile::QueryParamValue,
        EncoderProfile::UnstructuredQuery,
        EncoderProfile::Fragment,
    ];

    pub fn encoder(self) -> &'static PercentEncoder {
        encoder_for(self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EncoderProfile::UserInfo => "user_info",
            EncoderProfile::RegName => "reg_name",
            EncoderProfile::PathSegment => "path_segment",
            EncoderProfile::MatrixParam => "matrix_param",
            EncoderProfile::QueryParamName => "query_param_name",
            EncoderProfile::QueryParamValue => "query_param_value",
            EncoderProfile::UnstructuredQuery => "unstructured_query",
            EncoderProfile::Fragment => "fragment",
        }
    }
}

impl fmt::Display for EncoderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoder profile: {0}")]
pub struct UnknownProfile(pub String);

impl FromStr for EncoderProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EncoderProfile::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}

/// The shared encoder for `profile`.
pub fn encoder_for(profile: EncoderProfile) -> &'static PercentEncoder {
    match profile {
        EncoderProfile::UserInfo => &USER_INFO,
        EncoderProfile::RegName => &REG_NAME,
        EncoderProfile::PathSegment => &PATH_SEGMENT,
        EncoderProfile::MatrixParam => &MATRIX_PARAM,
        EncoderProfile::QueryParamName => &QUERY_PARAM_NAME,
        EncoderProfile::QueryParamValue => &QUERY_PARAM_VALUE,
        EncoderProfile::UnstructuredQuery => &UNSTRUCTURED_QUERY,
        EncoderProfile::Fragment => &FRAGMENT,
    }
}

pub fn encode(profile: EncoderProfile, input: &str) -> String {
    encoder_for(profile).encode(input)
}
