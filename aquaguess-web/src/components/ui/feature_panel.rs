use std::collections::BTreeSet;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FeaturePanelProps {
    /// Candidate features in display order (alphabetical).
    pub features: Vec<String>,
    pub selected: BTreeSet<String>,
    /// Locks every checkbox; set once the session counter goes negative.
    pub disabled: bool,
    pub on_toggle: Callback<(String, bool)>,
}

#[function_component(FeaturePanel)]
pub fn feature_panel(props: &FeaturePanelProps) -> Html {
    let checkboxes = props.features.iter().enumerate().map(|(idx, feature)| {
        let id = format!("feature-{idx}");
        let checked = props.selected.contains(feature);
        let onchange = {
            let on_toggle = props.on_toggle.clone();
            let feature = feature.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_toggle.emit((feature.clone(), input.checked()));
            })
        };
        html! {
            <li class="field" key={feature.clone()}>
                <input
                    id={id.clone()}
                    type="checkbox"
                    {checked}
                    disabled={props.disabled}
                    {onchange}
                />
                <label for={id}>{ feature.clone() }</label>
            </li>
        }
    });

    html! {
        <ul class="feature-list">
            { for checkboxes }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(disabled: bool) -> FeaturePanelProps {
        FeaturePanelProps {
            features: vec![
                String::from("Month"),
                String::from("Oxygen (mg/l)"),
                String::from("pH"),
            ],
            selected: [String::from("pH")].into_iter().collect(),
            disabled,
            on_toggle: Callback::noop(),
        }
    }

    fn render(props: FeaturePanelProps) -> String {
        block_on(LocalServerRenderer::<FeaturePanel>::with_props(props).render())
    }

    #[test]
    fn panel_renders_a_labeled_checkbox_per_feature() {
        let html = render(props(false));
        assert!(html.contains("Month"));
        assert!(html.contains("Oxygen (mg/l)"));
        assert!(html.contains("pH"));
        assert!(html.contains("checkbox"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn locked_panel_disables_every_checkbox() {
        let html = render(props(true));
        assert!(html.matches("disabled").count() >= 3);
    }
}
