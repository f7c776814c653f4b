//! Numeric display and range helpers shared with the presentation layer.

/// Format an error metric for display with three decimals, the precision
/// the original readout uses. Non-finite values render as "n/a".
#[must_use]
pub fn format_metric(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.3}")
    } else {
        String::from("n/a")
    }
}

/// Minimum and maximum over a slice, skipping non-finite samples. Returns
/// `None` when nothing finite remains.
#[must_use]
pub fn series_extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        extent = Some(match extent {
            Some((min, max)) => (min.min(v), max.max(v)),
            None => (v, v),
        });
    }
    extent
}

/// Extent over both chart series at once, so true and predicted lines share
/// one vertical scale.
#[must_use]
pub fn joint_extent(a: &[f64], b: &[f64]) -> Option<(f64, f64)> {
    match (series_extent(a), series_extent(b)) {
        (Some((min_a, max_a)), Some((min_b, max_b))) => {
            Some((min_a.min(min_b), max_a.max(max_b)))
        }
        (one, two) => one.or(two),
    }
}
