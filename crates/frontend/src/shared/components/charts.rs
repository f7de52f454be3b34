//! Inline-SVG charts for the dashboard.
//!
//! Both charts share the same geometry: a fixed viewBox, values scaled
//! against the series maximum, labels below the baseline.

use leptos::prelude::*;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 250.0;
const BASELINE: f64 = 210.0;
const TOP_MARGIN: f64 = 24.0;

fn scale(value: i64, max: i64) -> f64 {
    (value as f64 / max as f64) * (BASELINE - TOP_MARGIN)
}

fn series_max(values: &[i64]) -> i64 {
    values.iter().copied().max().unwrap_or(0).max(1)
}

/// Vertical bar chart for (label, value) series.
#[component]
pub fn BarChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] values: Signal<Vec<i64>>,
) -> impl IntoView {
    let bars = move || {
        let labels = labels.get();
        let values = values.get();
        let max = series_max(&values);
        let slot = WIDTH / labels.len().max(1) as f64;
        labels
            .iter()
            .zip(values.iter())
            .enumerate()
            .map(|(i, (label, &value))| {
                let height = scale(value, max);
                let x = i as f64 * slot + slot * 0.15;
                let width = slot * 0.7;
                let center = x + width / 2.0;
                view! {
                    <g>
                        <rect
                            x=format!("{:.1}", x)
                            y=format!("{:.1}", BASELINE - height)
                            width=format!("{:.1}", width)
                            height=format!("{:.1}", height)
                            class="chart__bar"
                        />
                        <text
                            x=format!("{:.1}", center)
                            y=format!("{:.1}", BASELINE - height - 6.0)
                            text-anchor="middle"
                            class="chart__value"
                        >
                            {value}
                        </text>
                        <text
                            x=format!("{:.1}", center)
                            y=format!("{:.1}", BASELINE + 18.0)
                            text-anchor="middle"
                            class="chart__axis-label"
                        >
                            {label.clone()}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) class="chart" role="img">
            <line
                x1="0"
                y1=format!("{:.1}", BASELINE)
                x2=format!("{:.1}", WIDTH)
                y2=format!("{:.1}", BASELINE)
                class="chart__baseline"
            />
            {bars}
        </svg>
    }
}

/// Filled line (area) chart for (label, value) series.
#[component]
pub fn AreaChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] values: Signal<Vec<i64>>,
) -> impl IntoView {
    let geometry = Signal::derive(move || {
        let values = values.get();
        let max = series_max(&values);
        let slot = WIDTH / values.len().max(1) as f64;
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let x = i as f64 * slot + slot / 2.0;
                (x, BASELINE - scale(value, max))
            })
            .collect();
        let line = points
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        let area = match (points.first(), points.last()) {
            (Some((first_x, _)), Some((last_x, _))) => format!(
                "{:.1},{:.1} {} {:.1},{:.1}",
                first_x, BASELINE, line, last_x, BASELINE
            ),
            _ => String::new(),
        };
        (line, area)
    });

    let axis = move || {
        let labels = labels.get();
        let slot = WIDTH / labels.len().max(1) as f64;
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                view! {
                    <text
                        x=format!("{:.1}", i as f64 * slot + slot / 2.0)
                        y=format!("{:.1}", BASELINE + 18.0)
                        text-anchor="middle"
                        class="chart__axis-label"
                    >
                        {label.clone()}
                    </text>
                }
            })
            .collect_view()
    };

    view! {
        <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) class="chart" role="img">
            <line
                x1="0"
                y1=format!("{:.1}", BASELINE)
                x2=format!("{:.1}", WIDTH)
                y2=format!("{:.1}", BASELINE)
                class="chart__baseline"
            />
            <polygon points=move || geometry.get().1 class="chart__area" />
            <polyline points=move || geometry.get().0 fill="none" class="chart__line" />
            {axis}
        </svg>
    }
}
