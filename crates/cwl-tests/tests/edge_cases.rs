//! Edge case integration tests for the decode → report pipeline.
//!
//! Every failing input must be rejected before the reporter runs: the host
//! sees either the complete report plus a success response, or an error
//! with an empty sink. These tests check both halves of that contract for
//! each failure class.
//!
//! - **Encoding**: text that is not padded standard base64.
//! - **Decompression**: bytes that are not gzip, or a gzip stream cut short.
//! - **Parse**: gzip of text that is not JSON.
//! - **Schema**: JSON missing a required field or with a mistyped field.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cwl_decoder::{DecodeError, ErrorKind};
use cwl_driver::{DriverError, InvocationEvent, LogsHandler};
use cwl_encoder::LogBatchEncoder;
use cwl_encoder::compression::compress;
use cwl_types::SchemaError;

fn golden(subpath: &str) -> InvocationEvent {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir
        .join("tests/golden")
        .join(subpath)
        .join("event.json");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap()
}

/// Wrap arbitrary text the way the log service would (gzip + base64).
fn wrap(json: &str) -> InvocationEvent {
    InvocationEvent::new(STANDARD.encode(compress(json.as_bytes(), 6).unwrap()))
}

/// Run the handler, assert it failed without writing, and return the kind.
fn rejected_kind(event: &InvocationEvent) -> ErrorKind {
    let mut out = Vec::new();
    let err = LogsHandler::default()
        .handle(event, &mut out)
        .expect_err("handler should reject the event");
    assert!(
        out.is_empty(),
        "no output may be written on failure, got {:?}",
        String::from_utf8_lossy(&out)
    );
    match err {
        DriverError::Decode(e) => e.kind(),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

const VALID_JSON: &str = r#"{"logGroup":"/app/test","logStream":"s1","messageType":"DATA_MESSAGE","owner":"123456789012","subscriptionFilters":["f1"],"logEvents":[{"timestamp":1700000000000,"message":"hello","id":"e1"}]}"#;

// ── Empty batch ───────────────────────────────────────────────────────────────

#[test]
fn empty_events_reports_header_only() {
    let data = LogBatchEncoder::new("/app/test", "s1", "123456789012")
        .add_subscription_filter("f1")
        .encode()
        .unwrap();
    let mut out = Vec::new();
    let response = LogsHandler::default()
        .handle(&InvocationEvent::new(data), &mut out)
        .unwrap();

    assert_eq!(response.status_code, 200);
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("\n\n=== Log Events ===\n"));
    assert!(!text.contains("Timestamp:"));
}

// ── Schema ────────────────────────────────────────────────────────────────────

#[test]
fn missing_owner_golden_rejected_before_output() {
    assert_eq!(
        rejected_kind(&golden("edge_cases/missing_owner")),
        ErrorKind::Schema
    );
}

#[test]
fn missing_owner_names_the_field() {
    let event = wrap(&VALID_JSON.replace(r#""owner":"123456789012","#, ""));
    let err = LogsHandler::default()
        .handle(&event, &mut Vec::new())
        .unwrap_err();
    match err {
        DriverError::Decode(DecodeError::Schema(SchemaError::Mismatch(inner))) => {
            assert!(inner.to_string().contains("owner"), "got: {inner}");
        }
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn every_required_field_is_enforced() {
    for field in [
        r#""logGroup":"/app/test","#,
        r#""logStream":"s1","#,
        r#""messageType":"DATA_MESSAGE","#,
        r#""owner":"123456789012","#,
        r#""subscriptionFilters":["f1"],"#,
        r#""timestamp":1700000000000,"#,
        r#","id":"e1""#,
    ] {
        let json = VALID_JSON.replace(field, "");
        assert_ne!(json, VALID_JSON, "pattern {field} did not match");
        assert_eq!(rejected_kind(&wrap(&json)), ErrorKind::Schema, "{field}");
    }

    let json = VALID_JSON.replace(r#","message":"hello""#, "");
    assert_eq!(rejected_kind(&wrap(&json)), ErrorKind::Schema);

    let no_events = r#"{"logGroup":"g","logStream":"s","messageType":"DATA_MESSAGE","owner":"o","subscriptionFilters":[]}"#;
    assert_eq!(rejected_kind(&wrap(no_events)), ErrorKind::Schema);
}

#[test]
fn wrong_types_are_schema_errors() {
    let cases = [
        VALID_JSON.replace(r#""logEvents":[{"#, r#""logEvents":{"x":[{"#).replace("}]}", "}]}}"),
        VALID_JSON.replace("1700000000000", "\"1700000000000\""),
        VALID_JSON.replace("1700000000000", "1.5"),
        VALID_JSON.replace(r#"["f1"]"#, r#""f1""#),
        VALID_JSON.replace(r#""owner":"123456789012""#, r#""owner":123456789012"#),
        VALID_JSON.replace(r#""message":"hello""#, r#""message":null"#),
    ];
    for json in &cases {
        assert_eq!(rejected_kind(&wrap(json)), ErrorKind::Schema, "{json}");
    }
}

#[test]
fn non_object_document_is_schema_error() {
    assert_eq!(rejected_kind(&wrap("[]")), ErrorKind::Schema);
    assert_eq!(rejected_kind(&wrap("\"DATA_MESSAGE\"")), ErrorKind::Schema);
}

// ── Parse ─────────────────────────────────────────────────────────────────────

#[test]
fn malformed_json_is_parse_error() {
    assert_eq!(rejected_kind(&wrap("{\"logGroup\": ")), ErrorKind::Parse);
    assert_eq!(rejected_kind(&wrap("")), ErrorKind::Parse);
    assert_eq!(rejected_kind(&wrap("not json at all")), ErrorKind::Parse);
    assert_eq!(
        rejected_kind(&wrap(&format!("{VALID_JSON} trailing"))),
        ErrorKind::Parse
    );
}

// ── Decompression ─────────────────────────────────────────────────────────────

#[test]
fn truncated_gzip_golden_rejected() {
    assert_eq!(
        rejected_kind(&golden("edge_cases/truncated_gzip")),
        ErrorKind::Decompression
    );
}

#[test]
fn uncompressed_json_is_decompression_error() {
    let event = InvocationEvent::new(STANDARD.encode(VALID_JSON));
    assert_eq!(rejected_kind(&event), ErrorKind::Decompression);
}

#[test]
fn corrupted_checksum_is_decompression_error() {
    let mut compressed = compress(VALID_JSON.as_bytes(), 6).unwrap();
    let crc_offset = compressed.len() - 8;
    compressed[crc_offset] ^= 0x01;
    let event = InvocationEvent::new(STANDARD.encode(compressed));
    assert_eq!(rejected_kind(&event), ErrorKind::Decompression);
}

#[test]
fn zero_padded_gzip_is_processed() {
    let mut compressed = compress(VALID_JSON.as_bytes(), 6).unwrap();
    compressed.extend_from_slice(&[0, 0, 0, 0]);
    let event = InvocationEvent::new(STANDARD.encode(compressed));

    let mut out = Vec::new();
    let response = LogsHandler::default().handle(&event, &mut out).unwrap();
    assert_eq!(response.status_code, 200);
    assert!(String::from_utf8(out).unwrap().contains("Owner: 123456789012\n"));
}

#[test]
fn garbage_after_gzip_is_decompression_error() {
    let mut compressed = compress(VALID_JSON.as_bytes(), 6).unwrap();
    compressed.extend_from_slice(b"tail");
    let event = InvocationEvent::new(STANDARD.encode(compressed));
    assert_eq!(rejected_kind(&event), ErrorKind::Decompression);
}

#[test]
fn empty_payload_is_decompression_error() {
    assert_eq!(
        rejected_kind(&InvocationEvent::new("")),
        ErrorKind::Decompression
    );
}

// ── Encoding ──────────────────────────────────────────────────────────────────

#[test]
fn invalid_base64_is_encoding_error() {
    for data in ["!!!!", "H4sI*AAA", "H4sIAA", "H4sI AAA"] {
        assert_eq!(
            rejected_kind(&InvocationEvent::new(data)),
            ErrorKind::Encoding,
            "{data}"
        );
    }
}

#[test]
fn invalid_event_json_is_rejected() {
    let mut out = Vec::new();
    let err = LogsHandler::default()
        .handle_json(r#"{"awslogs": {"data": 7}}"#, &mut out)
        .unwrap_err();
    assert!(matches!(err, DriverError::InvalidEvent(_)));
    assert!(out.is_empty());
}
