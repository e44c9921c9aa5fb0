use serde::{Deserialize, Serialize};

/// Confirmation text carried (JSON-encoded) in every successful response.
pub const SUCCESS_MESSAGE: &str = "Log processing completed successfully";

/// The request delivered by the host: `{"awslogs": {"data": "<base64>"}}`.
///
/// Other keys the host may add are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationEvent {
    pub awslogs: AwsLogs,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsLogs {
    /// The encoded payload: base64 of a gzip-compressed JSON batch.
    pub data: String,
}

impl InvocationEvent {
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            awslogs: AwsLogs { data: data.into() },
        }
    }
}

/// The value returned to the host.
///
/// Serializes as `{"statusCode": 200, "body": "\"Log processing completed successfully\""}`.
/// The body is itself a JSON document (a quoted string), so the message
/// appears with escaped quotes once the response is serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    /// The one response this handler produces.
    #[must_use]
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: format!("\"{SUCCESS_MESSAGE}\""),
        }
    }
}
