//! Golden fixture generator for the conformance test suite.
//!
//! Writes every fixture under `tests/golden/`. Run it after changing the
//! encoder or the fixture set; the committed events are then decoded by
//! `tests/conformance.rs` and compared against insta snapshots. gzip
//! output differs between encoders (header timestamp, deflate choices), so
//! regenerated events may differ byte-wise while decoding to the same
//! batch.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p cwl-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory                      | Contents                                        |
//! |--------------------------------|-------------------------------------------------|
//! | single_event                   | One event, one filter                           |
//! | multi_event                    | Lambda invocation, out-of-order timestamps      |
//! | empty_events                   | Metadata only, `logEvents: []`                  |
//! | control_message                | Reachability check sent on subscription create  |
//! | multiple_filters               | Three filters, non-ASCII message                |
//! | edge_cases/missing_owner       | Valid gzip + JSON without `owner`               |
//! | edge_cases/truncated_gzip      | gzip stream cut in half before base64           |

#![allow(clippy::pedantic)]

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cwl_driver::InvocationEvent;
use cwl_encoder::LogBatchEncoder;
use cwl_encoder::compression::{DEFAULT_COMPRESSION_LEVEL, compress};

fn main() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let golden_dir = manifest_dir.join("tests/golden");

    generate_single_event(&golden_dir);
    generate_multi_event(&golden_dir);
    generate_empty_events(&golden_dir);
    generate_control_message(&golden_dir);
    generate_multiple_filters(&golden_dir);
    generate_edge_cases(&golden_dir);

    println!("All golden fixtures written to {}", golden_dir.display());
}

fn write_event(dir: &Path, name: &str, data: String) {
    let fixture_dir = dir.join(name);
    std::fs::create_dir_all(&fixture_dir).unwrap();
    let json = serde_json::to_string_pretty(&InvocationEvent::new(data)).unwrap();
    std::fs::write(fixture_dir.join("event.json"), format!("{json}\n")).unwrap();
    println!("  wrote {name}/event.json");
}

fn generate_single_event(dir: &Path) {
    let data = LogBatchEncoder::new("/app/test", "s1", "123456789012")
        .add_subscription_filter("f1")
        .add_event(1_700_000_000_000, "hello", "e1")
        .encode()
        .unwrap();
    write_event(dir, "single_event", data);
}

fn generate_multi_event(dir: &Path) {
    let data = LogBatchEncoder::new(
        "/aws/lambda/orders",
        "2024/01/15/[$LATEST]0f1e2d3c4b5a69788796a5b4c3d2e1f0",
        "123456789012",
    )
    .add_subscription_filter("LambdaStream_orders")
    .add_event(
        1_705_312_800_000,
        "START RequestId: 8f5c1f2a-1b0e-4d5e-9a4b-3c2d1e0f9a8b Version: $LATEST",
        "37997512343565278376284919223131052470766022624612548608",
    )
    .add_event(
        1_705_312_800_125,
        r#"{"level":"info","msg":"order created","orderId":42}"#,
        "37997512346352974455286019440935648768474062213358288897",
    )
    .add_event(
        1_705_312_800_093,
        "Traceback (most recent call last):\n  File \"handler.py\", line 12\nValueError: bad input",
        "37997512345641553236583924917521604932839637456218587138",
    )
    .add_event(
        1_705_312_800_250,
        "END RequestId: 8f5c1f2a-1b0e-4d5e-9a4b-3c2d1e0f9a8b",
        "37997512349140670534288119658739693066181487801904054275",
    )
    .encode()
    .unwrap();
    write_event(dir, "multi_event", data);
}

fn generate_empty_events(dir: &Path) {
    let data = LogBatchEncoder::new("/app/quiet", "s0", "123456789012")
        .add_subscription_filter("f1")
        .encode()
        .unwrap();
    write_event(dir, "empty_events", data);
}

fn generate_control_message(dir: &Path) {
    let data = LogBatchEncoder::new("", "", "CloudwatchLogs")
        .control_message()
        .add_event(
            1_432_826_855_000,
            "CWL CONTROL MESSAGE: Checking health of destination Kinesis stream.",
            "",
        )
        .encode()
        .unwrap();
    write_event(dir, "control_message", data);
}

fn generate_multiple_filters(dir: &Path) {
    let data = LogBatchEncoder::new("/ecs/cafe-api", "web/web/7c1d", "210987654321")
        .add_subscription_filter("errors")
        .add_subscription_filter("audit-trail")
        .add_subscription_filter("all-to-s3")
        .add_event(1_710_000_000_001, "café ☕ order for naïve user", "u1")
        .encode()
        .unwrap();
    write_event(dir, "multiple_filters", data);
}

fn generate_edge_cases(dir: &Path) {
    let edge = dir.join("edge_cases");

    // Hand-built JSON: the typed encoder cannot omit a field.
    let missing_owner = r#"{"messageType":"DATA_MESSAGE","logGroup":"/app/test","logStream":"s1","subscriptionFilters":["f1"],"logEvents":[{"id":"e1","timestamp":1700000000000,"message":"hello"}]}"#;
    let compressed = compress(missing_owner.as_bytes(), DEFAULT_COMPRESSION_LEVEL).unwrap();
    write_event(&edge, "missing_owner", STANDARD.encode(compressed));

    let full = LogBatchEncoder::new("/app/test", "s1", "123456789012")
        .add_event(1_700_000_000_000, "hello ".repeat(40), "e1")
        .build();
    let json = serde_json::to_vec(&full).unwrap();
    let compressed = compress(&json, DEFAULT_COMPRESSION_LEVEL).unwrap();
    let truncated = &compressed[..compressed.len() / 2];
    write_event(&edge, "truncated_gzip", STANDARD.encode(truncated));
}
