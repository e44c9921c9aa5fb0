#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod decompression;
pub mod error;
pub mod parse;
pub mod text;

pub use config::DecoderConfig;
pub use decoder::{DecodedBatch, LogsDecoder};
pub use error::{DecodeError, ErrorKind};
