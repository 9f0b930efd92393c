mod decoder;
mod error;

pub use decoder::{decode, PercentDecoder};
pub use error::DecodeError;
