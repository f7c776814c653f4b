use crate::game::Verdict;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct VerdictBannerProps {
    /// Outcome of the latest evaluated submission, if any.
    #[prop_or_default]
    pub verdict: Option<Verdict>,
}

#[function_component(VerdictBanner)]
pub fn verdict_banner(props: &VerdictBannerProps) -> Html {
    match &props.verdict {
        None => Html::default(),
        Some(Verdict::Correct) => html! {
            <p class="banner banner-success" role="status">
                { crate::i18n::t("play.success") }
            </p>
        },
        Some(Verdict::Incorrect { attempts_left }) => {
            let count = attempts_left.to_string();
            html! {
                <p class="banner banner-warning" role="status">
                    { crate::i18n::tr("play.warning", &[("count", &count)]) }
                </p>
            }
        }
        Some(Verdict::Exhausted) => html! {
            <p class="banner banner-fatal" role="alert">
                { crate::i18n::t("play.game_over") }
            </p>
        },
    }
}
