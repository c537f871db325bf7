use crate::view_model::{AppViewModel, SUBMITTING_LABEL, SUBMIT_LABEL};
use crate::{parse_offset, ClipRequest, SubmissionResult};

pub type JobId = u64;

/// Status shown when the request never produced a usable answer.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Error processing the video.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    source_url: String,
    start_text: String,
    end_text: String,
    in_flight: Option<JobId>,
    status_message: String,
    result_media_ref: String,
    last_job_id: JobId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let submitting = self.is_submitting();
        AppViewModel {
            source_url: self.source_url.clone(),
            start_text: self.start_text.clone(),
            end_text: self.end_text.clone(),
            submit_label: if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            submit_enabled: !submitting,
            status_line: non_empty(&self.status_message),
            media_ref: non_empty(&self.result_media_ref),
            dirty: self.dirty,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_job(&self) -> Option<JobId> {
        self.in_flight
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn result_media_ref(&self) -> &str {
        &self.result_media_ref
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_source_url(&mut self, value: String) {
        if self.source_url != value {
            self.source_url = value;
            self.dirty = true;
        }
    }

    pub(crate) fn set_start_text(&mut self, value: String) {
        if self.start_text != value {
            self.start_text = value;
            self.dirty = true;
        }
    }

    pub(crate) fn set_end_text(&mut self, value: String) {
        if self.end_text != value {
            self.end_text = value;
            self.dirty = true;
        }
    }

    /// Enters the submitting state and captures the request payload.
    pub(crate) fn begin_submission(&mut self) -> (JobId, ClipRequest) {
        self.last_job_id += 1;
        let job_id = self.last_job_id;
        self.in_flight = Some(job_id);
        self.status_message.clear();
        self.result_media_ref.clear();
        self.dirty = true;

        let request = ClipRequest {
            url: self.source_url.clone(),
            start_time: parse_offset(&self.start_text),
            end_time: parse_offset(&self.end_text),
        };
        (job_id, request)
    }

    /// Applies the outcome of the in-flight submission and returns to idle.
    ///
    /// Returns `false`, leaving state untouched, when `job_id` is not the
    /// submission currently in flight.
    pub(crate) fn settle(&mut self, job_id: JobId, result: SubmissionResult) -> bool {
        if self.in_flight != Some(job_id) {
            return false;
        }

        match result {
            SubmissionResult::Succeeded { message, media_ref } => {
                self.status_message = message;
                self.result_media_ref = media_ref;
            }
            SubmissionResult::Rejected { error } => {
                self.status_message = format!("Error: {error}");
                self.result_media_ref.clear();
            }
            SubmissionResult::TransportFailed => {
                self.status_message = TRANSPORT_FAILURE_MESSAGE.to_string();
                self.result_media_ref.clear();
            }
        }

        self.in_flight = None;
        self.dirty = true;
        true
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
