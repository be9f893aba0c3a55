use std::time::Duration;

use engine_logging::{engine_debug, engine_trace, engine_warn};
use futures_util::StreamExt;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::decode::{decode_analysis, error_detail};
use crate::{AnalysisPayload, EngineError, FailureKind, TransportError, Upload};

const ANALYZE_PATH: &str = "analyze";
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone)]
pub struct TransportSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Caller-supplied deadline for the whole request; `None` waits forever.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl TransportSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// `{base_url}/analyze`, keeping any path prefix of the base url.
    pub fn endpoint(&self) -> Result<Url, EngineError> {
        let invalid = |reason: String| EngineError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut base = Url::parse(self.base_url.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base.scheme())));
        }
        if base.cannot_be_a_base() {
            return Err(invalid("url cannot be a base".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(ANALYZE_PATH)
            .map_err(|err| invalid(err.to_string()))
    }
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Some(Duration::from_secs(120)),
            max_response_bytes: 8 * 1024 * 1024,
        }
    }
}

/// Sends one document to the analysis service.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn analyze(&self, upload: &Upload) -> Result<AnalysisPayload, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    endpoint: Url,
    max_response_bytes: u64,
}

impl ReqwestTransport {
    pub fn new(settings: &TransportSettings) -> Result<Self, EngineError> {
        let endpoint = settings.endpoint()?;
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(EngineError::Client)?;
        Ok(Self {
            client,
            endpoint,
            max_response_bytes: settings.max_response_bytes,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_form(upload: &Upload) -> Result<Form, TransportError> {
        let part = Part::bytes(upload.content.to_vec())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|err| TransportError::new(FailureKind::InvalidRequest, err.to_string()))?;
        Ok(Form::new().part(UPLOAD_FIELD, part))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, TransportError> {
        if let Some(content_len) = response.content_length() {
            if content_len > self.max_response_bytes {
                return Err(self.too_large(Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_response_bytes {
                return Err(self.too_large(Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        engine_trace!("Read {} response bytes from {}", bytes.len(), self.endpoint);
        Ok(bytes)
    }

    fn too_large(&self, actual: Option<u64>) -> TransportError {
        TransportError::new(
            FailureKind::TooLarge {
                max_bytes: self.max_response_bytes,
                actual,
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn analyze(&self, upload: &Upload) -> Result<AnalysisPayload, TransportError> {
        let form = Self::build_form(upload)?;
        engine_debug!(
            "POST {} file_name={} mime_type={} bytes={}",
            self.endpoint,
            upload.file_name,
            upload.mime_type,
            upload.content.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = self
                .read_body(response)
                .await
                .ok()
                .and_then(|body| error_detail(&body))
                .unwrap_or_else(|| status.to_string());
            engine_warn!("Analysis endpoint returned {}: {}", status, message);
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let body = self.read_body(response).await?;
        decode_analysis(&body)
            .map_err(|err| TransportError::new(FailureKind::MalformedResponse, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return TransportError::new(FailureKind::InvalidRequest, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
