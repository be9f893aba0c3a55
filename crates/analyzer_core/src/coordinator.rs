use std::fmt;

use engine_logging::{engine_debug, engine_info};

use crate::{AnalysisFailure, AnalysisResult, SelectedFile};

/// Identifies one analysis request. Minted in strictly increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Rebuilds a token echoed back by the transport. A token that was never
    /// issued simply fails the currency check.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    FileSelected(SelectedFile),
    Analyzing {
        file: SelectedFile,
        token: RequestToken,
    },
    Succeeded(AnalysisResult),
    Failed(AnalysisFailure),
}

/// A request the caller must hand to the transport exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub token: RequestToken,
    pub file: SelectedFile,
}

/// Sole owner and mutator of [`RequestState`].
///
/// Resolutions are applied only when their token is the latest one issued and
/// the machine is still analyzing under that token. Anything else is a stale
/// response and is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisRequestCoordinator {
    state: RequestState,
    issued: u64,
    last_file: Option<SelectedFile>,
}

impl AnalysisRequestCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Latest token minted so far, if any.
    pub fn latest_token(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }

    /// Token of the request currently in flight.
    pub fn in_flight(&self) -> Option<RequestToken> {
        match &self.state {
            RequestState::Analyzing { token, .. } => Some(*token),
            _ => None,
        }
    }

    /// Moves to `FileSelected(file)` from any state. Returns the token that
    /// was invalidated, if a request was in flight.
    pub fn on_file_selected(&mut self, file: SelectedFile) -> Option<RequestToken> {
        let invalidated = self.in_flight();
        if let Some(token) = invalidated {
            engine_debug!("Invalidated request {} by new selection", token);
        }
        self.state = RequestState::FileSelected(file);
        invalidated
    }

    /// Ignored unless a file is selected and nothing is in flight.
    pub fn submit(&mut self) -> Option<SubmitRequest> {
        let file = match &self.state {
            RequestState::FileSelected(file) => file.clone(),
            _ => return None,
        };
        Some(self.start(file))
    }

    /// Re-submits the last file after a failure.
    pub fn retry(&mut self) -> Option<SubmitRequest> {
        if !matches!(self.state, RequestState::Failed(_)) {
            return None;
        }
        let file = self.last_file.clone()?;
        Some(self.start(file))
    }

    /// Back to `Idle`. Returns the token that was invalidated, if any.
    pub fn reset(&mut self) -> Option<RequestToken> {
        let invalidated = self.in_flight();
        self.state = RequestState::Idle;
        self.last_file = None;
        invalidated
    }

    pub fn on_success(&mut self, token: RequestToken, result: AnalysisResult) -> bool {
        if !self.is_current(token) {
            engine_debug!("Discarded stale success for request {}", token);
            return false;
        }
        engine_info!("Request {} succeeded", token);
        self.state = RequestState::Succeeded(result);
        true
    }

    pub fn on_failure(&mut self, token: RequestToken, failure: AnalysisFailure) -> bool {
        if !self.is_current(token) {
            engine_debug!("Discarded stale failure for request {}: {}", token, failure);
            return false;
        }
        engine_info!("Request {} failed: {}", token, failure);
        self.state = RequestState::Failed(failure);
        true
    }

    fn is_current(&self, token: RequestToken) -> bool {
        self.latest_token() == Some(token) && self.in_flight() == Some(token)
    }

    fn start(&mut self, file: SelectedFile) -> SubmitRequest {
        self.issued += 1;
        let token = RequestToken(self.issued);
        engine_info!(
            "Submitting request {} name={} mime_type={} bytes={}",
            token,
            file.name,
            file.mime_type,
            file.size()
        );
        self.last_file = Some(file.clone());
        self.state = RequestState::Analyzing {
            file: file.clone(),
            token,
        };
        SubmitRequest { token, file }
    }
}
