use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use clipform_logging::{clip_debug, clip_error, clip_warn};

use crate::submit::{JobSubmitter, ReqwestSubmitter, SubmitSettings};
use crate::{EngineError, EngineEvent, FailureKind, JobId, ProcessRequest, SubmitError};

enum EngineCommand {
    Submit {
        job_id: JobId,
        request: ProcessRequest,
    },
}

/// Runs submissions on a background tokio runtime and reports their
/// settlement through [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> Result<Self, EngineError> {
        let submitter = ReqwestSubmitter::new(settings)?;
        Self::with_submitter(Arc::new(submitter))
    }

    pub fn with_submitter(submitter: Arc<dyn JobSubmitter>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("clipform-io")
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("clipform-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let submitter = submitter.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(handle_command(submitter, command, event_tx));
                }
                clip_debug!("engine command channel closed");
            })
            .map_err(EngineError::Runtime)?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, job_id: JobId, request: ProcessRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit { job_id, request })
            .is_err()
        {
            clip_warn!("engine worker gone; job {} was not sent", job_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event.
    ///
    /// Fails with [`EngineError::Disconnected`] once the worker and every
    /// task it spawned have gone away.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineError> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(EngineError::Disconnected),
        }
    }
}

async fn handle_command(
    submitter: Arc<dyn JobSubmitter>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { job_id, request } => {
            let _ = event_tx.send(EngineEvent::Dispatched { job_id });
            // Runs in its own task so a panicking submitter still settles the job.
            let task = tokio::spawn(async move { submitter.submit(job_id, &request).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    clip_error!("job {} submission task aborted: {}", job_id, err);
                    Err(SubmitError::transport(FailureKind::EngineStopped, err.to_string()))
                }
            };
            let _ = event_tx.send(EngineEvent::Settled { job_id, result });
        }
    }
}
