use contracts::usecases::u508_nl_query::Row;
use leptos::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING: f64 = 24.0;

const PALETTE: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

/// One line of the chart: a numeric column indexed by row number
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub series: Vec<Series>,
    min: f64,
    max: f64,
}

impl ChartModel {
    /// Collects every column that holds a number in every row
    ///
    /// `None` when the result set is empty or has no such column.
    pub fn from_rows(rows: &[Row]) -> Option<Self> {
        let first = rows.first()?;
        let series: Vec<Series> = first
            .keys()
            .filter_map(|column| {
                let values = rows
                    .iter()
                    .map(|row| row.get(column).and_then(|v| v.as_f64()))
                    .collect::<Option<Vec<f64>>>()?;
                Some(Series {
                    name: column.clone(),
                    values,
                })
            })
            .collect();

        if series.is_empty() {
            return None;
        }

        let (min, max) = series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        Some(Self { series, min, max })
    }

    /// SVG `points` attribute of `series`, scaled to the chart area
    pub fn polyline_points(&self, series: &Series) -> String {
        let count = series.values.len();
        let plot_width = WIDTH - 2.0 * PADDING;
        let plot_height = HEIGHT - 2.0 * PADDING;
        let range = self.max - self.min;

        series
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let x = if count > 1 {
                    PADDING + plot_width * index as f64 / (count - 1) as f64
                } else {
                    WIDTH / 2.0
                };
                let y = if range > 0.0 {
                    HEIGHT - PADDING - plot_height * (value - self.min) / range
                } else {
                    HEIGHT / 2.0
                };
                format!("{:.1},{:.1}", x, y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Line chart of the numeric columns; renders nothing without one
///
/// The SVG is rebuilt from scratch on every change of `rows`, replacing the
/// previous drawing.
#[component]
pub fn ResultsChart(#[prop(into)] rows: Signal<Option<Vec<Row>>>) -> impl IntoView {
    move || {
        let model = rows.with(|rows| rows.as_deref().and_then(ChartModel::from_rows))?;

        let lines = model
            .series
            .iter()
            .enumerate()
            .map(|(index, series)| {
                let color = PALETTE[index % PALETTE.len()];
                let points = model.polyline_points(series);
                view! {
                    <polyline
                        fill="none"
                        stroke=color
                        stroke-width="2"
                        points=points
                    />
                }
            })
            .collect_view();

        let legend = model
            .series
            .iter()
            .enumerate()
            .map(|(index, series)| {
                let color = PALETTE[index % PALETTE.len()];
                view! {
                    <span class="chart-legend-item">
                        <span
                            class="chart-legend-swatch"
                            style=format!("background: {};", color)
                        ></span>
                        {series.name.clone()}
                    </span>
                }
            })
            .collect_view();

        Some(view! {
            <section id="chartSection" class="chart-section">
                <svg
                    id="resultsChart"
                    viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                    role="img"
                >
                    {lines}
                </svg>
                <div class="chart-legend">{legend}</div>
            </section>
        })
    }
}
