pub mod charset;
mod encoder;
pub mod profiles;

pub use charset::SafeCharSet;
pub use encoder::{Encoded, PercentEncoder};
pub use profiles::{encoder_for, EncoderProfile, UnknownProfile};
