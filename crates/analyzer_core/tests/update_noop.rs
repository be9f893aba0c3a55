use analyzer_core::{
    update, AnalysisFailure, AnalysisResult, AppState, Msg, RequestToken, SelectedFile,
};

#[test]
fn reset_from_idle_is_not_dirty() {
    let (mut state, effects) = update(AppState::new(), Msg::ResetClicked);

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn unknown_token_resolutions_leave_state_untouched() {
    let file = SelectedFile::new("notes.txt", "text/plain", b"hello".to_vec());
    let (mut state, _) = update(AppState::new(), Msg::FileOffered(file));
    assert!(state.consume_dirty());

    let (next, effects) = update(
        state.clone(),
        Msg::AnalysisSucceeded {
            token: RequestToken::from_raw(7),
            result: AnalysisResult::default(),
        },
    );
    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (mut next, effects) = update(
        next,
        Msg::AnalysisFailed {
            token: RequestToken::from_raw(7),
            failure: AnalysisFailure::network("refused"),
        },
    );
    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn analyze_without_selection_is_not_dirty() {
    let (mut state, effects) = update(AppState::new(), Msg::AnalyzeClicked);

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
