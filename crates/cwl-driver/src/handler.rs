use std::io::Write;

use cwl_decoder::{DecodedBatch, LogsDecoder};
use tracing::{info, warn};

use crate::config::DriverConfig;
use crate::error::DriverError;
use crate::invocation::{InvocationEvent, InvocationResponse};
use crate::report::{BatchReporter, TextReporter};

/// Entry point the host calls once per delivered batch.
///
/// ```text
/// InvocationEvent ──▶ LogsDecoder ──▶ LogBatch ──▶ TextReporter ──▶ sink
///                          │                                         │
///                    DecodeError ──▶ Err(DriverError)   InvocationResponse::success()
/// ```
///
/// Decoding finishes before the reporter runs, so a failing payload
/// never produces partial output: the sink sees either the complete
/// report or nothing. The handler keeps no state between calls.
pub struct LogsHandler {
    decoder: LogsDecoder,
}

impl Default for LogsHandler {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

impl LogsHandler {
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        Self {
            decoder: LogsDecoder::with_config(config.decoder),
        }
    }

    /// Decode the event's payload without reporting it.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Decode`] if any decoder stage fails.
    pub fn decode(&self, event: &InvocationEvent) -> Result<DecodedBatch, DriverError> {
        self.decoder.decode(&event.awslogs.data).map_err(|e| {
            warn!(stage = e.kind().as_str(), error = %e, "rejected log payload");
            DriverError::from(e)
        })
    }

    /// Decode the event, write the report to `out`, and return the
    /// success response.
    ///
    /// # Errors
    ///
    /// - [`DriverError::Decode`] if the payload fails any decoder stage.
    ///   Nothing is written to `out` in that case.
    /// - [`DriverError::Io`] if `out` rejects the report.
    pub fn handle(
        &self,
        event: &InvocationEvent,
        out: &mut dyn Write,
    ) -> Result<InvocationResponse, DriverError> {
        let decoded = self.decode(event)?;
        TextReporter.report(&decoded.batch, out)?;

        info!(
            log_group = %decoded.batch.log_group,
            events = decoded.batch.log_events.len(),
            control = decoded.batch.is_control_message(),
            "log batch reported"
        );
        Ok(InvocationResponse::success())
    }

    /// Like [`handle`](Self::handle), starting from the raw invocation
    /// JSON.
    ///
    /// # Errors
    ///
    /// [`DriverError::InvalidEvent`] if `event_json` is not an object with
    /// a string at `awslogs.data`, plus everything `handle` returns.
    pub fn handle_json(
        &self,
        event_json: &str,
        out: &mut dyn Write,
    ) -> Result<InvocationResponse, DriverError> {
        let event: InvocationEvent =
            serde_json::from_str(event_json).map_err(DriverError::InvalidEvent)?;
        self.handle(&event, out)
    }
}
