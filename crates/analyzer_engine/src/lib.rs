//! Analyzer engine: transport to the analysis service and request execution.
mod decode;
mod engine;
mod transport;
mod types;

pub use decode::{decode_analysis, error_detail, AnalysisPayload, DecodeError};
pub use engine::{EngineHandle, EventSink};
pub use transport::{ReqwestTransport, Transport, TransportSettings};
pub use types::{EngineError, EngineEvent, FailureKind, RequestId, TransportError, Upload};
