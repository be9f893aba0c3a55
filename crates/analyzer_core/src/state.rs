use crate::view_model::{AppViewModel, FailureView, Phase, SelectedFileView};
use crate::{
    present, AnalysisFailure, AnalysisRequestCoordinator, AnalysisResult, FileSelectionManager,
    RequestState, RequestToken, SelectedFile, SelectionError, SubmitRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selection: FileSelectionManager,
    requests: AnalysisRequestCoordinator,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_state(&self) -> &RequestState {
        self.requests.state()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selection.current()
    }

    pub fn selection_error(&self) -> Option<&SelectionError> {
        self.selection.error()
    }

    /// Returns and clears the dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let (phase, failure, result) = match self.requests.state() {
            RequestState::Idle => (Phase::Idle, None, None),
            RequestState::FileSelected(_) => (Phase::Ready, None, None),
            RequestState::Analyzing { .. } => (Phase::Analyzing, None, None),
            RequestState::Succeeded(result) => (Phase::Succeeded, None, Some(present(result))),
            RequestState::Failed(failure) => {
                (Phase::Failed, Some(FailureView::from(failure)), None)
            }
        };

        AppViewModel {
            phase,
            selected_file: self.selection.current().map(SelectedFileView::from),
            selection_error: self.selection.error().map(ToString::to_string),
            failure,
            result,
            can_analyze: phase == Phase::Ready,
            can_retry: phase == Phase::Failed,
        }
    }

    /// Runs the file through the selection manager and, when accepted, moves
    /// the request machine to `FileSelected`.
    pub(crate) fn offer_file(
        &mut self,
        file: SelectedFile,
    ) -> Result<Option<RequestToken>, SelectionError> {
        self.dirty = true;
        self.selection.select(file.clone())?;
        Ok(self.requests.on_file_selected(file))
    }

    pub(crate) fn submit(&mut self) -> Option<SubmitRequest> {
        let request = self.requests.submit();
        self.dirty |= request.is_some();
        request
    }

    pub(crate) fn retry(&mut self) -> Option<SubmitRequest> {
        let request = self.requests.retry();
        self.dirty |= request.is_some();
        request
    }

    pub(crate) fn reset(&mut self) -> Option<RequestToken> {
        let changed = self.selection != FileSelectionManager::default()
            || *self.requests.state() != RequestState::Idle;
        self.selection.clear();
        self.dirty |= changed;
        self.requests.reset()
    }

    pub(crate) fn apply_success(&mut self, token: RequestToken, result: AnalysisResult) {
        self.dirty |= self.requests.on_success(token, result);
    }

    pub(crate) fn apply_failure(&mut self, token: RequestToken, failure: AnalysisFailure) {
        self.dirty |= self.requests.on_failure(token, failure);
    }
}
