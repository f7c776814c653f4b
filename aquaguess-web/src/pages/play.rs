use crate::components::ui::feature_panel::FeaturePanel;
use crate::components::ui::prediction_chart::PredictionChart;
use crate::components::ui::verdict_banner::VerdictBanner;
use crate::game::{GameRound, GuessSession, ResultRecord, SubmitOutcome, Verdict};
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct PlayPageProps {
    pub round: Rc<GameRound>,
    pub session: GuessSession,
    pub selected: BTreeSet<String>,
    pub last_outcome: Option<SubmitOutcome>,
    pub revealed: bool,
    pub on_toggle_feature: Callback<(String, bool)>,
    pub on_submit: Callback<()>,
    pub on_reveal: Callback<()>,
}

impl PartialEq for PlayPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.round, &other.round)
            && self.session == other.session
            && self.selected == other.selected
            && self.last_outcome == other.last_outcome
            && self.revealed == other.revealed
    }
}

/// What the result column currently charts.
fn shown_record<'a>(props: &'a PlayPageProps) -> Option<(String, &'a ResultRecord)> {
    let table = props.round.table();
    if props.revealed {
        return Some((
            crate::i18n::t("play.final_result"),
            table.best_record(),
        ));
    }
    match &props.last_outcome {
        Some(SubmitOutcome::Evaluated { key, .. }) => table
            .get(key)
            .map(|record| (crate::i18n::t("play.prediction_result"), record)),
        _ => None,
    }
}

fn current_verdict(props: &PlayPageProps) -> Option<Verdict> {
    if props.revealed {
        return None;
    }
    match &props.last_outcome {
        Some(SubmitOutcome::Evaluated { verdict, .. }) => Some(verdict.clone()),
        _ => None,
    }
}

#[function_component(PlayPage)]
pub fn play_page(props: &PlayPageProps) -> Html {
    let table = props.round.table();

    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_reveal = {
        let cb = props.on_reveal.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let result_column = shown_record(props).map(|(header, record)| {
        let rmse = crate::game::format_metric(record.rmse);
        html! {
            <>
                <h2>{ header }</h2>
                <PredictionChart
                    index={table.index().to_vec()}
                    y_true={record.y_true.clone()}
                    y_pred={record.y_pred.clone()}
                />
                <p class="metric-readout">
                    { crate::i18n::tr("play.rmse", &[("value", &rmse)]) }
                </p>
            </>
        }
    });

    html! {
        <div class="play-columns" data-testid="play-screen">
            <section class="panel feature-column">
                <h2>{ crate::i18n::t("play.select_features") }</h2>
                <FeaturePanel
                    features={props.round.catalog().sorted_features()}
                    selected={props.selected.clone()}
                    disabled={props.session.controls_locked()}
                    on_toggle={props.on_toggle_feature.clone()}
                />
                <button
                    class="submit-btn"
                    disabled={props.session.is_over()}
                    onclick={on_submit}
                >
                    { crate::i18n::t("play.submit") }
                </button>
            </section>
            <section class="panel result-column">
                { result_column.unwrap_or_default() }
                <VerdictBanner verdict={current_verdict(props)} />
                if props.session.is_over() && !props.revealed {
                    <button class="reveal-btn" onclick={on_reveal}>
                        { crate::i18n::t("play.reveal") }
                    </button>
                }
            </section>
        </div>
    }
}
