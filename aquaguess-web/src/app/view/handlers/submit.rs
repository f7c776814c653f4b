use crate::app::state::AppState;
use crate::game::{SubmitOutcome, SubsetKey};
use yew::prelude::*;

/// Evaluate the current checkbox selection against the results table.
///
/// Ignored submissions (terminal session, empty selection, unknown subset)
/// leave every state handle untouched, so the previous render survives.
pub fn build_submit(state: &AppState) -> Callback<()> {
    let round = state.round.clone();
    let session_handle = state.session.clone();
    let selected = state.selected.clone();
    let last_outcome = state.last_outcome.clone();
    Callback::from(move |()| {
        let Some(round) = (*round).clone() else {
            return;
        };
        let selection = SubsetKey::new((*selected).iter().cloned());
        let mut session = (*session_handle).clone();
        match session.submit(round.table(), &selection) {
            SubmitOutcome::Ignored(_) => {}
            outcome @ SubmitOutcome::Evaluated { .. } => {
                session_handle.set(session);
                last_outcome.set(Some(outcome));
            }
        }
    })
}
