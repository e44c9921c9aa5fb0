#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full decoder entry point on arbitrary text.
//
// Catches panics in:
// - base64 validation (alphabet, padding, trailing bits)
// - gzip header, deflate body and trailer checks
// - the decompression size limit
// - JSON parsing and batch schema validation
fuzz_target!(|data: &str| {
    let _ = cwl_decoder::LogsDecoder::new().decode(data);
});
