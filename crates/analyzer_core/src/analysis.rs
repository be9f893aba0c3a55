use std::fmt;

/// Payload returned by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub sentiment: String,
    pub topics: Vec<String>,
}

/// Classification of a failed analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Endpoint unreachable, timed out, or the request could not be built.
    Network,
    /// Endpoint answered with a non-success status.
    Server { status: Option<u16> },
    /// Success status but the payload did not match the schema.
    MalformedResponse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Network => "network",
            FailureKind::Server { .. } => "server",
            FailureKind::MalformedResponse => "malformed-response",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Server {
                status: Some(status),
            } => write!(f, "server ({status})"),
            other => f.write_str(other.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl AnalysisFailure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, detail)
    }

    pub fn server(status: Option<u16>, detail: impl Into<String>) -> Self {
        Self::new(FailureKind::Server { status }, detail)
    }

    pub fn malformed_response(detail: impl Into<String>) -> Self {
        Self::new(FailureKind::MalformedResponse, detail)
    }
}

impl fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.detail)
        }
    }
}
