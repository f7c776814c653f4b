mod handlers;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);

    let main_view = (*state.round).clone().map_or_else(
        || {
            html! {
                <crate::pages::boot::BootPage error={(*state.boot_error).clone()} />
            }
        },
        |round| {
            html! {
                <crate::pages::play::PlayPage
                    round={round}
                    session={(*state.session).clone()}
                    selected={(*state.selected).clone()}
                    last_outcome={(*state.last_outcome).clone()}
                    revealed={*state.revealed}
                    on_toggle_feature={handlers.toggle_feature.clone()}
                    on_submit={handlers.submit.clone()}
                    on_reveal={handlers.reveal.clone()}
                />
            }
        },
    );

    html! {
        <main id="main" role="main">
            <header class="app-header">
                <h1>{ crate::i18n::t("app.title") }</h1>
                <p class="tagline">{ crate::i18n::t("app.tagline") }</p>
            </header>
            { main_view }
        </main>
    }
}
