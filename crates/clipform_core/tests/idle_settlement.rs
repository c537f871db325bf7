use clipform_core::{update, AppState, Msg, SubmissionResult};

#[test]
fn settlement_while_idle_is_ignored() {
    let state = AppState::new();
    let (mut next, effects) = update(
        state.clone(),
        Msg::SubmissionSettled {
            job_id: 1,
            result: SubmissionResult::TransportFailed,
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
