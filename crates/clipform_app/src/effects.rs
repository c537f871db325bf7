use std::time::Duration;

use clipform_core::{ClipRequest, Effect, JobId, Msg, SubmissionResult};
use clipform_engine::{
    EngineError, EngineEvent, EngineHandle, ProcessRequest, ProcessResponse, SubmitError,
    SubmitSettings,
};
use clipform_logging::{clip_debug, clip_error, clip_info, clip_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitJob { job_id, request } => {
                    clip_info!(
                        "SubmitJob job_id={} url={} start={:?} end={:?}",
                        job_id,
                        request.url,
                        request.start_time,
                        request.end_time
                    );
                    self.engine.submit(job_id, to_process_request(request));
                }
            }
        }
    }

    /// Waits up to `wait` for the engine and translates what arrives into a
    /// message. A dead engine settles `in_flight` as a transport failure.
    pub fn next_msg(&self, in_flight: JobId, wait: Duration) -> Option<Msg> {
        match self.engine.recv_timeout(wait) {
            Ok(Some(EngineEvent::Dispatched { job_id })) => {
                clip_debug!("job {} dispatched", job_id);
                None
            }
            Ok(Some(EngineEvent::Settled { job_id, result })) => Some(Msg::SubmissionSettled {
                job_id,
                result: to_submission_result(job_id, result),
            }),
            Ok(None) => None,
            Err(err) => {
                clip_error!("{}; failing job {}", err, in_flight);
                Some(Msg::SubmissionSettled {
                    job_id: in_flight,
                    result: SubmissionResult::TransportFailed,
                })
            }
        }
    }
}

fn to_process_request(request: ClipRequest) -> ProcessRequest {
    ProcessRequest {
        url: request.url,
        start_time: request.start_time,
        end_time: request.end_time,
    }
}

fn to_submission_result(
    job_id: JobId,
    result: Result<ProcessResponse, SubmitError>,
) -> SubmissionResult {
    match result {
        Ok(ProcessResponse {
            message,
            video_path,
        }) => SubmissionResult::Succeeded {
            message,
            media_ref: video_path,
        },
        Err(SubmitError::Rejected { status, error }) => {
            clip_warn!("Job {} rejected with status {}: {}", job_id, status, error);
            SubmissionResult::Rejected { error }
        }
        Err(err @ SubmitError::Transport { .. }) => {
            clip_warn!("Job {} failed: {}", job_id, err);
            SubmissionResult::TransportFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipform_engine::FailureKind;

    #[test]
    fn request_fields_carry_over() {
        let request = to_process_request(ClipRequest {
            url: "https://youtu.be/abc".to_string(),
            start_time: Some(3),
            end_time: None,
        });
        assert_eq!(
            request,
            ProcessRequest {
                url: "https://youtu.be/abc".to_string(),
                start_time: Some(3),
                end_time: None,
            }
        );
    }

    #[test]
    fn outcomes_map_to_the_three_branches() {
        assert_eq!(
            to_submission_result(
                1,
                Ok(ProcessResponse {
                    message: "Done".to_string(),
                    video_path: "/out/1.mp4".to_string(),
                })
            ),
            SubmissionResult::Succeeded {
                message: "Done".to_string(),
                media_ref: "/out/1.mp4".to_string(),
            }
        );
        assert_eq!(
            to_submission_result(
                2,
                Err(SubmitError::Rejected {
                    status: 400,
                    error: "invalid url".to_string(),
                })
            ),
            SubmissionResult::Rejected {
                error: "invalid url".to_string(),
            }
        );
        for kind in [
            FailureKind::Network,
            FailureKind::Timeout,
            FailureKind::MalformedBody { status: 200 },
        ] {
            assert_eq!(
                to_submission_result(
                    3,
                    Err(SubmitError::Transport {
                        kind,
                        message: "x".to_string(),
                    })
                ),
                SubmissionResult::TransportFailed
            );
        }
    }
}
