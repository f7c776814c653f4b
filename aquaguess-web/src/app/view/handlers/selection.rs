use crate::app::state::AppState;
use yew::prelude::*;

/// Toggle one feature checkbox on or off.
pub fn build_toggle_feature(state: &AppState) -> Callback<(String, bool)> {
    let selected = state.selected.clone();
    let session = state.session.clone();
    Callback::from(move |(feature, on): (String, bool)| {
        // A locked panel accepts no toggles.
        if session.controls_locked() {
            return;
        }
        let mut next = (*selected).clone();
        if on {
            next.insert(feature);
        } else {
            next.remove(&feature);
        }
        selected.set(next);
    })
}
