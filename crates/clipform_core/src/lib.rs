//! Clipform core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod offset;
mod state;
mod update;
mod view_model;

pub use effect::{ClipRequest, Effect};
pub use msg::{Msg, SubmissionResult};
pub use offset::parse_offset;
pub use state::{AppState, JobId, TRANSPORT_FAILURE_MESSAGE};
pub use update::update;
pub use view_model::{AppViewModel, SUBMITTING_LABEL, SUBMIT_LABEL};
