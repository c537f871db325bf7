//! Clipform engine: job submission over HTTP and effect execution.
mod engine;
mod media;
mod submit;
mod types;

pub use engine::EngineHandle;
pub use media::resolve_media_ref;
pub use submit::{JobSubmitter, ReqwestSubmitter, SubmitSettings, DEFAULT_ENDPOINT};
pub use types::{
    EngineError, EngineEvent, FailureKind, JobId, ProcessErrorBody, ProcessRequest,
    ProcessResponse, SubmitError,
};
