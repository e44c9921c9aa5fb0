#![warn(clippy::pedantic)]

pub mod batch;
pub mod error;
pub mod event;
pub mod message_type;

pub use batch::LogBatch;
pub use error::SchemaError;
pub use event::LogEvent;
pub use message_type::{CONTROL_MESSAGE, DATA_MESSAGE};
