use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BootPageProps {
    /// Set when the startup load failed; boot errors are fatal.
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(BootPage)]
pub fn boot_page(props: &BootPageProps) -> Html {
    props.error.as_ref().map_or_else(
        || {
            html! {
                <section class="panel boot-screen" aria-busy="true" aria-live="polite">
                    <p>{ crate::i18n::t("boot.loading") }</p>
                </section>
            }
        },
        |error| {
            html! {
                <section class="panel boot-screen" role="alert">
                    <p class="boot-error">{ crate::i18n::t("boot.failed") }</p>
                    <p class="boot-error-detail">{ error.clone() }</p>
                </section>
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn boot_page_shows_loading_by_default() {
        let html = block_on(
            LocalServerRenderer::<BootPage>::with_props(BootPageProps { error: None }).render(),
        );
        assert!(html.contains(&crate::i18n::t("boot.loading")));
        assert!(!html.contains("boot-error"));
    }

    #[test]
    fn boot_page_surfaces_fatal_errors() {
        let props = BootPageProps {
            error: Some(String::from("results artifact contains no entries")),
        };
        let html = block_on(LocalServerRenderer::<BootPage>::with_props(props).render());
        assert!(html.contains(&crate::i18n::t("boot.failed")));
        assert!(html.contains("results artifact contains no entries"));
    }
}
