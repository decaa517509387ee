//! Descriptive statistics for the selected state.

use rate_map_dashboard_models::{DetailView, StatLine, StateStats, YearDelta, YearValue};
use rate_map_dataset::DatasetStore;
use rate_map_rates_models::RateRecord;

pub const DETAIL_PLACEHOLDER: &str = "Click a state on the map to see details";

#[must_use]
pub fn derive_detail(store: &DatasetStore, selected: Option<&str>) -> DetailView {
    let stats = selected
        .and_then(|state| store.state_series(state))
        .and_then(state_stats);

    stats.map_or_else(
        || DetailView::Placeholder {
            message: DETAIL_PLACEHOLDER.to_string(),
        },
        DetailView::Stats,
    )
}

/// Computes statistics over a series sorted ascending by year.
///
/// Extremes and deltas resolve ties to the earliest year. `None` for an
/// empty series.
#[must_use]
pub fn state_stats(series: &[RateRecord]) -> Option<StateStats> {
    let first = series.first()?;
    let point = |r: &RateRecord| YearValue {
        year: r.year,
        rate: r.rate,
    };

    let mut min = point(first);
    let mut max = point(first);
    let mut sum = 0.0;
    for record in series {
        if record.rate < min.rate {
            min = point(record);
        }
        if record.rate > max.rate {
            max = point(record);
        }
        sum += record.rate;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = sum / series.len() as f64;

    let mut largest_increase: Option<YearDelta> = None;
    let mut largest_decrease: Option<YearDelta> = None;
    for pair in series.windows(2) {
        let [prev, next] = pair else { continue };
        let delta = YearDelta {
            from_year: prev.year,
            to_year: next.year,
            change: next.rate - prev.rate,
        };
        if largest_increase.is_none_or(|d| delta.change > d.change) {
            largest_increase = Some(delta);
        }
        if largest_decrease.is_none_or(|d| delta.change < d.change) {
            largest_decrease = Some(delta);
        }
    }

    let mut lines = vec![
        stat_line("Minimum", format_value(min)),
        stat_line("Maximum", format_value(max)),
        stat_line("Average", format!("{mean:.1}")),
    ];
    if let Some(delta) = largest_increase {
        lines.push(stat_line("Largest Increase", format_delta(delta)));
    }
    if let Some(delta) = largest_decrease {
        lines.push(stat_line("Largest Decrease", format_delta(delta)));
    }

    Some(StateStats {
        state: first.state.clone(),
        min,
        max,
        mean,
        largest_increase,
        largest_decrease,
        lines,
    })
}

fn stat_line(label: &str, text: String) -> StatLine {
    StatLine {
        label: label.to_string(),
        text,
    }
}

fn format_value(value: YearValue) -> String {
    format!("{:.1} ({})", value.rate, value.year)
}

fn format_delta(delta: YearDelta) -> String {
    format!("{:+.1} ({}→{})", delta.change, delta.from_year, delta.to_year)
}
