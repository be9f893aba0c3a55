use crate::{RequestToken, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `file` to the analysis endpoint and report back under `token`.
    SubmitAnalysis {
        token: RequestToken,
        file: SelectedFile,
    },
    /// The request is no longer current; the transport may drop it.
    AbandonAnalysis { token: RequestToken },
}
