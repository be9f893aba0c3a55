//! Analyzer core: pure request-lifecycle state machine and view-model helpers.
mod analysis;
mod coordinator;
mod effect;
mod msg;
mod render;
mod selection;
mod state;
mod update;
mod view_model;

pub use analysis::{AnalysisFailure, AnalysisResult, FailureKind};
pub use coordinator::{AnalysisRequestCoordinator, RequestState, RequestToken, SubmitRequest};
pub use effect::Effect;
pub use msg::Msg;
pub use render::{present, DisplayModel, SentimentBucket};
pub use selection::{
    is_accepted_mime_type, FileSelectionManager, SelectedFile, SelectionError,
    ACCEPTED_MIME_TYPES,
};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, FailureView, Phase, SelectedFileView};
