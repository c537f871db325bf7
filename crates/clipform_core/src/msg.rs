#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the source URL field.
    SourceChanged(String),
    /// User edited the start offset field (seconds, free text).
    StartChanged(String),
    /// User edited the end offset field (seconds, free text).
    EndChanged(String),
    /// User pressed the submit trigger.
    SubmitClicked,
    /// The processing service answered, or the request failed in transport.
    SubmissionSettled {
        job_id: crate::JobId,
        result: SubmissionResult,
    },
}

/// How a submission ended, as far as the form is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Succeeded { message: String, media_ref: String },
    Rejected { error: String },
    TransportFailed,
}
