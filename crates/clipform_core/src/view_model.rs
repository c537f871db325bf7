/// Trigger label while idle.
pub const SUBMIT_LABEL: &str = "Process";
/// Trigger label while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Processing...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub source_url: String,
    pub start_text: String,
    pub end_text: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    /// Present iff the last completed submission left a message.
    pub status_line: Option<String>,
    /// Present iff the last submission succeeded with a media reference.
    pub media_ref: Option<String>,
    pub dirty: bool,
}
