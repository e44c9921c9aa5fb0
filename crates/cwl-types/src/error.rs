/// Errors raised when a well-formed JSON document does not have the shape
/// of a log batch.
///
/// Syntax problems (truncated text, stray bytes, invalid UTF-8) are not
/// represented here; those belong to the decoder's parse stage. A
/// `SchemaError` always means "valid JSON, wrong structure".
///
/// ```text
/// ┌──────────────┬─────────────────────────────────────────────────────┐
/// │ Variant      │ Cause                                               │
/// ├──────────────┼─────────────────────────────────────────────────────┤
/// │ NotAnObject  │ Top-level value is an array, string, number, ...    │
/// │ Mismatch     │ Required field absent, or present with wrong type   │
/// └──────────────┴─────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The document root was not a JSON object.
    #[error("expected a JSON object at the document root, found {found}")]
    NotAnObject { found: &'static str },

    /// A required field was missing or carried an unexpected type.
    ///
    /// The inner message names the offending field, e.g.
    /// ``missing field `owner` `` or
    /// ``invalid type: string "x", expected i64``.
    #[error("log batch schema mismatch")]
    Mismatch(#[from] serde_json::Error),
}
