use crate::app::state::AppState;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
struct BootstrapHandles {
    round: UseStateHandle<Option<Rc<crate::game::GameRound>>>,
    boot_error: UseStateHandle<Option<String>>,
}

fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        round: app_state.round.clone(),
        boot_error: app_state.boot_error.clone(),
    }
}

fn bootstrap_load(handles: &BootstrapHandles) {
    match crate::game::create_web_engine().load_round() {
        Ok(round) => handles.round.set(Some(Rc::new(round))),
        Err(error) => {
            log::error!("Failed to load game data: {error}");
            handles.boot_error.set(Some(error.to_string()));
        }
    }
}

/// Load the embedded artifacts once, on first render.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        bootstrap_load(&handles);
        || {}
    });
}
