use crate::game::{GameRound, GuessSession, SubmitOutcome};
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    /// Loaded catalog + results table; `None` until bootstrap completes.
    pub round: UseStateHandle<Option<Rc<GameRound>>>,
    pub boot_error: UseStateHandle<Option<String>>,
    pub session: UseStateHandle<GuessSession>,
    /// Live checkbox selection, re-derived on every toggle.
    pub selected: UseStateHandle<BTreeSet<String>>,
    pub last_outcome: UseStateHandle<Option<SubmitOutcome>>,
    pub revealed: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        round: use_state(|| None),
        boot_error: use_state(|| None),
        // One session per mounted app; the initializer runs exactly once.
        session: use_state(GuessSession::new),
        selected: use_state(BTreeSet::new),
        last_outcome: use_state(|| None),
        revealed: use_state(|| false),
    }
}

impl AppState {
    #[must_use]
    pub fn data_ready(&self) -> bool {
        self.round.is_some()
    }
}
