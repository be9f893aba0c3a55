use crate::{AnalysisFailure, DisplayModel, FailureKind, SelectedFile};

const FAILURE_MESSAGE: &str = "Error analyzing document. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Ready,
    Analyzing,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub selected_file: Option<SelectedFileView>,
    pub selection_error: Option<String>,
    pub failure: Option<FailureView>,
    pub result: Option<DisplayModel>,
    pub can_analyze: bool,
    pub can_retry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFileView {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl From<&SelectedFile> for SelectedFileView {
    fn from(file: &SelectedFile) -> Self {
        Self {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size: file.size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureView {
    /// One of `network`, `server`, `malformed-response`.
    pub kind: &'static str,
    pub status: Option<u16>,
    pub detail: String,
    pub message: String,
}

impl From<&AnalysisFailure> for FailureView {
    fn from(failure: &AnalysisFailure) -> Self {
        let status = match failure.kind {
            FailureKind::Server { status } => status,
            _ => None,
        };
        Self {
            kind: failure.kind.as_str(),
            status,
            detail: failure.detail.clone(),
            message: FAILURE_MESSAGE.to_string(),
        }
    }
}
