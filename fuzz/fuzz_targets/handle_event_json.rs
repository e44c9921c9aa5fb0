#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: handler on arbitrary invocation JSON.
//
// Whatever the input, a failed invocation must leave the sink empty.
fuzz_target!(|data: &str| {
    let mut out = Vec::new();
    let result = cwl_driver::LogsHandler::default().handle_json(data, &mut out);
    if result.is_err() {
        assert!(out.is_empty(), "partial output written for a failed invocation");
    }
});
