use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_info, engine_warn};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::transport::{ReqwestTransport, Transport, TransportSettings};
use crate::{EngineError, EngineEvent, RequestId, Upload};

/// Receives engine events on the runtime thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

enum EngineCommand {
    Submit { request_id: RequestId, upload: Upload },
    Abandon { request_id: RequestId },
}

/// Handle to the background runtime that executes analysis requests.
///
/// Each submission resolves with exactly one `AnalysisCompleted` event unless
/// it is abandoned first. Dropping every handle stops the runtime thread.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: &TransportSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let transport = Arc::new(ReqwestTransport::new(settings)?);
        engine_info!("Analysis endpoint {}", transport.endpoint());
        Self::with_transport(transport, sink)
    }

    pub fn with_transport(
        transport: Arc<dyn Transport>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::Builder::new()
            .name("analyzer-engine".to_string())
            .spawn(move || run_commands(runtime, cmd_rx, transport, sink))
            .map_err(EngineError::Thread)?;

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, request_id: RequestId, upload: Upload) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit { request_id, upload })
            .is_err()
        {
            engine_warn!("Engine stopped; dropped request {}", request_id);
        }
    }

    /// Aborts the request if it is still running. Its completion may already
    /// have been emitted.
    pub fn abandon(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Abandon { request_id });
    }
}

fn run_commands(
    runtime: Runtime,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn EventSink>,
) {
    let mut in_flight: HashMap<RequestId, JoinHandle<()>> = HashMap::new();

    while let Ok(command) = cmd_rx.recv() {
        in_flight.retain(|_, task| !task.is_finished());
        match command {
            EngineCommand::Submit { request_id, upload } => {
                let transport = transport.clone();
                let sink = sink.clone();
                let task = runtime.spawn(async move {
                    let result = transport.analyze(&upload).await;
                    match &result {
                        Ok(_) => engine_info!("Request {} completed", request_id),
                        Err(err) => engine_warn!("Request {} failed: {}", request_id, err),
                    }
                    sink.emit(EngineEvent::AnalysisCompleted { request_id, result });
                });
                in_flight.insert(request_id, task);
            }
            EngineCommand::Abandon { request_id } => {
                if let Some(task) = in_flight.remove(&request_id) {
                    engine_debug!("Aborting request {}", request_id);
                    task.abort();
                }
            }
        }
    }

    engine_debug!("Engine command channel closed; shutting down runtime");
}
