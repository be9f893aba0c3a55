use std::sync::{mpsc, Arc};

use analyzer_core::{AnalysisFailure, AnalysisResult, Effect, Msg, RequestToken, SelectedFile};
use analyzer_engine::{
    AnalysisPayload, EngineError, EngineEvent, EngineHandle, EventSink, FailureKind,
    TransportError, TransportSettings, Upload,
};
use engine_logging::engine_info;

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: &TransportSettings,
        events: mpsc::Sender<AppEvent>,
    ) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { events }))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis { token, file } => {
                    engine_info!(
                        "SubmitAnalysis token={} name={} bytes={}",
                        token,
                        file.name,
                        file.size()
                    );
                    self.engine.submit(token.get(), to_upload(file));
                }
                Effect::AbandonAnalysis { token } => {
                    engine_info!("AbandonAnalysis token={}", token);
                    self.engine.abandon(token.get());
                }
            }
        }
    }
}

/// Turns engine completions into update messages on the app event channel.
struct MsgSink {
    events: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.events.send(AppEvent::Msg(map_event(event)));
    }
}

fn to_upload(file: SelectedFile) -> Upload {
    Upload {
        file_name: file.name,
        mime_type: file.mime_type,
        content: file.content,
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted { request_id, result } => {
            let token = RequestToken::from_raw(request_id);
            match result {
                Ok(payload) => Msg::AnalysisSucceeded {
                    token,
                    result: map_payload(payload),
                },
                Err(err) => Msg::AnalysisFailed {
                    token,
                    failure: map_failure(err),
                },
            }
        }
    }
}

fn map_payload(payload: AnalysisPayload) -> AnalysisResult {
    AnalysisResult {
        summary: payload.summary,
        key_points: payload.key_points,
        sentiment: payload.sentiment,
        topics: payload.topics,
    }
}

fn map_failure(err: TransportError) -> AnalysisFailure {
    match err.kind {
        FailureKind::InvalidRequest | FailureKind::Network => AnalysisFailure::network(err.message),
        FailureKind::Timeout => AnalysisFailure::network(format!("timed out: {}", err.message)),
        FailureKind::HttpStatus(status) => AnalysisFailure::server(Some(status), err.message),
        FailureKind::TooLarge { .. } | FailureKind::MalformedResponse => {
            AnalysisFailure::malformed_response(err.message)
        }
    }
}
