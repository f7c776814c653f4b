mod reveal;
mod selection;
mod submit;

pub use reveal::build_reveal;
pub use selection::build_toggle_feature;
pub use submit::build_submit;

use crate::app::state::AppState;
use yew::prelude::*;

/// One synchronous callback per discrete user action.
#[derive(Clone)]
pub struct AppHandlers {
    pub toggle_feature: Callback<(String, bool)>,
    pub submit: Callback<()>,
    pub reveal: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            toggle_feature: build_toggle_feature(state),
            submit: build_submit(state),
            reveal: build_reveal(state),
        }
    }
}
