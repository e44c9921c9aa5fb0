#![warn(clippy::pedantic)]

pub mod compression;
pub mod encoder;
pub mod error;

pub use encoder::{LogBatchEncoder, encode_batch};
pub use error::EncodeError;
