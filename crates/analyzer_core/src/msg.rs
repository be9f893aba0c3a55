use crate::{AnalysisFailure, AnalysisResult, RequestToken, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The file picker yielded a candidate file.
    FileOffered(SelectedFile),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// User clicked Retry after a failure.
    RetryClicked,
    /// User cleared the workflow.
    ResetClicked,
    /// Transport resolved a request with a valid payload.
    AnalysisSucceeded {
        token: RequestToken,
        result: AnalysisResult,
    },
    /// Transport rejected a request.
    AnalysisFailed {
        token: RequestToken,
        failure: AnalysisFailure,
    },
}
