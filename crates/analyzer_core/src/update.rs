use crate::{AppState, Effect, Msg, SubmitRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileOffered(file) => match state.offer_file(file) {
            Ok(invalidated) => invalidated
                .map(|token| Effect::AbandonAnalysis { token })
                .into_iter()
                .collect(),
            // Rejection is recorded on the selection manager; nothing to run.
            Err(_) => Vec::new(),
        },
        Msg::AnalyzeClicked => state.submit().map(submit_effect).into_iter().collect(),
        Msg::RetryClicked => state.retry().map(submit_effect).into_iter().collect(),
        Msg::ResetClicked => state
            .reset()
            .map(|token| Effect::AbandonAnalysis { token })
            .into_iter()
            .collect(),
        Msg::AnalysisSucceeded { token, result } => {
            state.apply_success(token, result);
            Vec::new()
        }
        Msg::AnalysisFailed { token, failure } => {
            state.apply_failure(token, failure);
            Vec::new()
        }
    };

    (state, effects)
}

fn submit_effect(request: SubmitRequest) -> Effect {
    Effect::SubmitAnalysis {
        token: request.token,
        file: request.file,
    }
}
