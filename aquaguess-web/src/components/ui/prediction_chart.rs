use crate::game::joint_extent;
use yew::prelude::*;

const VIEW_WIDTH: f64 = 560.0;
const VIEW_HEIGHT: f64 = 240.0;
const PADDING: f64 = 24.0;

#[derive(Properties, Clone, PartialEq)]
pub struct PredictionChartProps {
    /// Sample labels, one per point in each series.
    pub index: Vec<String>,
    pub y_true: Vec<f64>,
    pub y_pred: Vec<f64>,
}

/// Map a series onto SVG polyline coordinates inside the padded viewbox.
/// Both series share `extent` so they plot on one vertical scale.
fn polyline_points(values: &[f64], extent: (f64, f64)) -> String {
    let (min, max) = extent;
    let span = max - min;
    let steps = values.len().saturating_sub(1).max(1) as f64;
    let inner_w = VIEW_WIDTH - 2.0 * PADDING;
    let inner_h = VIEW_HEIGHT - 2.0 * PADDING;

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = PADDING + (i as f64 / steps) * inner_w;
            // A flat series plots along the vertical midline.
            let norm = if span > 0.0 { (v - min) / span } else { 0.5 };
            let y = VIEW_HEIGHT - PADDING - norm * inner_h;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[function_component(PredictionChart)]
pub fn prediction_chart(props: &PredictionChartProps) -> Html {
    let Some(extent) = joint_extent(&props.y_true, &props.y_pred) else {
        return html! { <figure class="prediction-chart prediction-chart-empty" /> };
    };

    let true_points = polyline_points(&props.y_true, extent);
    let pred_points = polyline_points(&props.y_pred, extent);
    let (min, max) = extent;
    let x_first = props.index.first().cloned().unwrap_or_default();
    let x_last = props.index.last().cloned().unwrap_or_default();
    let view_box = format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}");

    html! {
        <figure class="prediction-chart">
            <svg viewBox={view_box} role="img" aria-label={crate::i18n::t("chart.label")}>
                <polyline class="series-true" fill="none" points={true_points} />
                <polyline class="series-pred" fill="none" points={pred_points} />
            </svg>
            <figcaption class="chart-legend">
                <span class="legend-true">{ crate::i18n::t("chart.true") }</span>
                <span class="legend-pred">{ crate::i18n::t("chart.predicted") }</span>
                <span class="axis-x">{ format!("{x_first} – {x_last}") }</span>
                <span class="axis-y">{ format!("{min:.1} – {max:.1}") }</span>
            </figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn points_span_the_padded_viewbox() {
        let points = polyline_points(&[1.0, 2.0, 3.0], (1.0, 3.0));
        let coords: Vec<&str> = points.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0], "24.0,216.0");
        assert_eq!(coords[2], "536.0,24.0");
    }

    #[test]
    fn flat_series_stays_on_the_midline() {
        let points = polyline_points(&[2.0, 2.0], (2.0, 2.0));
        for coord in points.split(' ') {
            let y: f64 = coord.split(',').nth(1).unwrap().parse().unwrap();
            assert!((y - VIEW_HEIGHT / 2.0).abs() < 1.0);
        }
    }

    #[test]
    fn chart_renders_both_series_and_legend() {
        let props = PredictionChartProps {
            index: vec![String::from("2022-01"), String::from("2022-02")],
            y_true: vec![5.0, 6.0],
            y_pred: vec![5.2, 5.8],
        };
        let html = block_on(LocalServerRenderer::<PredictionChart>::with_props(props).render());
        assert_eq!(html.matches("<polyline").count(), 2);
        assert!(html.contains("series-true"));
        assert!(html.contains("series-pred"));
        assert!(html.contains("2022-01"));
        assert!(html.contains(&crate::i18n::t("chart.predicted")));
    }

    #[test]
    fn empty_series_render_an_empty_chart() {
        let props = PredictionChartProps {
            index: Vec::new(),
            y_true: Vec::new(),
            y_pred: Vec::new(),
        };
        let html = block_on(LocalServerRenderer::<PredictionChart>::with_props(props).render());
        assert!(html.contains("prediction-chart-empty"));
        assert!(!html.contains("polyline"));
    }
}
