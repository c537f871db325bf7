use std::time::Duration;

use clipform_logging::{clip_debug, clip_info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::{
    EngineError, FailureKind, JobId, ProcessErrorBody, ProcessRequest, ProcessResponse,
    SubmitError,
};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/process_video";

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// `None` leaves the request open until the transport settles it.
    pub request_timeout: Option<Duration>,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait JobSubmitter: Send + Sync {
    async fn submit(
        &self,
        job_id: JobId,
        request: &ProcessRequest,
    ) -> Result<ProcessResponse, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
    client: reqwest::Client,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(EngineError::Client)?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl JobSubmitter for ReqwestSubmitter {
    async fn submit(
        &self,
        job_id: JobId,
        request: &ProcessRequest,
    ) -> Result<ProcessResponse, SubmitError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| SubmitError::transport(FailureKind::InvalidEndpoint, err.to_string()))?;
        let body = serde_json::to_vec(request)
            .map_err(|err| SubmitError::transport(FailureKind::Encoding, err.to_string()))?;

        clip_info!("job {} POST {} ({} bytes)", job_id, endpoint, body.len());

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        clip_debug!("job {} answered {} ({} bytes)", job_id, status, bytes.len());

        classify_response(status, &bytes)
    }
}

/// The status decides which body shape is expected; a body that does not
/// match counts as a transport failure.
fn classify_response(status: StatusCode, body: &[u8]) -> Result<ProcessResponse, SubmitError> {
    if status.is_success() {
        return serde_json::from_slice::<ProcessResponse>(body)
            .map_err(|err| malformed_body(status, err));
    }

    match serde_json::from_slice::<ProcessErrorBody>(body) {
        Ok(ProcessErrorBody { error }) => Err(SubmitError::Rejected {
            status: status.as_u16(),
            error,
        }),
        Err(err) => Err(malformed_body(status, err)),
    }
}

fn malformed_body(status: StatusCode, err: serde_json::Error) -> SubmitError {
    SubmitError::transport(
        FailureKind::MalformedBody {
            status: status.as_u16(),
        },
        err.to_string(),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::transport(FailureKind::Timeout, err.to_string());
    }
    SubmitError::transport(FailureKind::Network, err.to_string())
}
