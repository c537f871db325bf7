#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the captured request to the processing service.
    SubmitJob {
        job_id: crate::JobId,
        request: ClipRequest,
    },
}

/// Request payload captured when the user submits.
///
/// `None` offsets mean "from the start" and "to the end" respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRequest {
    pub url: String,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}
