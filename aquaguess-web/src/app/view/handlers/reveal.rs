use crate::app::state::AppState;
use yew::prelude::*;

/// Show the best subset's record and pre-check exactly its members.
/// Only reachable once the session is over.
pub fn build_reveal(state: &AppState) -> Callback<()> {
    let round = state.round.clone();
    let session = state.session.clone();
    let selected = state.selected.clone();
    let revealed = state.revealed.clone();
    Callback::from(move |()| {
        let Some(round) = (*round).clone() else {
            return;
        };
        if !session.is_over() {
            return;
        }
        selected.set(round.table().best_subset().names().iter().cloned().collect());
        revealed.set(true);
    })
}
