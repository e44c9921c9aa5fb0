use cwl_decoder::DecoderConfig;

/// Configuration for [`LogsHandler`](crate::LogsHandler).
///
/// The report layout is fixed, so the only knobs are the decoder's. The
/// struct exists so the CLI and tests build handlers the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
    pub decoder: DecoderConfig,
}

impl DriverConfig {
    /// Override the decompression ceiling.
    #[must_use]
    pub fn with_max_decompressed_size(mut self, limit: usize) -> Self {
        self.decoder.max_decompressed_size = limit;
        self
    }
}
