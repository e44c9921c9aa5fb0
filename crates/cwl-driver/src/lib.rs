#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod handler;
pub mod invocation;
pub mod report;

pub use config::DriverConfig;
pub use error::DriverError;
pub use handler::LogsHandler;
pub use invocation::{AwsLogs, InvocationEvent, InvocationResponse, SUCCESS_MESSAGE};
pub use report::{BatchReporter, TextReporter};
