use serde::Deserialize;

/// Success body of `POST /analyze`. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisPayload {
    pub summary: String,
    pub key_points: Vec<String>,
    pub sentiment: String,
    pub topics: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body does not match the analysis schema: {message}")]
    Schema { message: String },
}

pub fn decode_analysis(bytes: &[u8]) -> Result<AnalysisPayload, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::Schema {
        message: err.to_string(),
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extracts the `detail` field the service puts on error responses.
/// Structured details (validation errors) are returned as compact JSON.
pub fn error_detail(bytes: &[u8]) -> Option<String> {
    let body: ErrorBody = serde_json::from_slice(bytes).ok()?;
    match body.detail {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
