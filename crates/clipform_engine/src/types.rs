use std::fmt;

use serde::{Deserialize, Serialize};

pub type JobId = u64;

/// JSON body posted to the processing endpoint. Absent offsets are sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRequest {
    pub url: String,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

/// Body of a successful answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessResponse {
    pub message: String,
    pub video_path: String,
}

/// Body of an answer whose status signals failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The request for this job is about to be sent.
    Dispatched { job_id: JobId },
    Settled {
        job_id: JobId,
        result: Result<ProcessResponse, SubmitError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The service answered, but reported that the job failed.
    #[error("service rejected the job (status {status}): {error}")]
    Rejected { status: u16, error: String },
    /// No usable answer was received.
    #[error("{kind}: {message}")]
    Transport { kind: FailureKind, message: String },
}

impl SubmitError {
    pub(crate) fn transport(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Encoding,
    Timeout,
    Network,
    MalformedBody { status: u16 },
    /// The submission task died before producing a result.
    EngineStopped,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Encoding => write!(f, "request encoding failed"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody { status } => {
                write!(f, "malformed response body (status {status})")
            }
            FailureKind::EngineStopped => write!(f, "submission task aborted"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("engine worker has stopped")]
    Disconnected,
}
