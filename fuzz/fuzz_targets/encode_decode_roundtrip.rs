#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use cwl_decoder::LogsDecoder;
use cwl_driver::TextReporter;
use cwl_encoder::LogBatchEncoder;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzEvent {
    timestamp: i64,
    message: String,
    id: String,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    log_group: String,
    log_stream: String,
    owner: String,
    control: bool,
    filters: Vec<String>,
    events: Vec<FuzzEvent>,
    level: u8,
}

// Fuzz target: LogBatchEncoder -> LogsDecoder roundtrip.
//
// Anything the encoder produces must decode back to the same batch, and
// rendering it must yield one block per event.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = FuzzInput::arbitrary(&mut u) else {
        return;
    };

    let mut encoder = LogBatchEncoder::new(&input.log_group, &input.log_stream, &input.owner);
    encoder.compression_level(u32::from(input.level % 10));
    if input.control {
        encoder.control_message();
    }
    for filter in &input.filters {
        encoder.add_subscription_filter(filter);
    }
    for event in input.events.iter().take(256) {
        encoder.add_event(event.timestamp, event.message.as_str(), event.id.as_str());
    }

    let expected = encoder.build();
    let payload = encoder.encode().expect("encoder output for a valid level");

    let decoded = LogsDecoder::new().decode(&payload);
    assert!(decoded.is_ok(), "decoder failed on valid encoder output: {:?}", decoded.err());
    let decoded = decoded.unwrap();
    assert_eq!(decoded.batch, expected);

    let rendered = TextReporter::render(&decoded.batch);
    assert!(rendered.contains("=== Log Events ==="));
});
