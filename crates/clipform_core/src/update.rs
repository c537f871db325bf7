use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SourceChanged(value) => {
            state.set_source_url(value);
            Vec::new()
        }
        Msg::StartChanged(value) => {
            state.set_start_text(value);
            Vec::new()
        }
        Msg::EndChanged(value) => {
            state.set_end_text(value);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The trigger is disabled while in flight; a stray click changes nothing.
            if state.is_submitting() {
                return (state, Vec::new());
            }
            let (job_id, request) = state.begin_submission();
            vec![Effect::SubmitJob { job_id, request }]
        }
        Msg::SubmissionSettled { job_id, result } => {
            state.settle(job_id, result);
            Vec::new()
        }
    };

    (state, effects)
}
