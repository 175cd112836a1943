use contracts::usecases::u508_nl_query::Row;
use leptos::prelude::*;
use serde_json::Value;

pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Rows of a result set flattened to display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// Column order comes from the first row; `None` for an empty result set
    pub fn from_rows(rows: &[Row]) -> Option<Self> {
        let first = rows.first()?;
        let columns: Vec<String> = first.keys().cloned().collect();
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| cell_text(row.get(column)))
                    .collect()
            })
            .collect();

        Some(Self { columns, rows })
    }
}

/// Display text of one value; null and missing values render empty
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Results region: nothing before the first answer, a "no results" note for
/// an empty answer, otherwise the table
#[component]
pub fn ResultsTable(
    /// Rows of the current page, `None` until a query has answered
    #[prop(into)]
    rows: Signal<Option<Vec<Row>>>,
) -> impl IntoView {
    view! {
        <div id="resultsOutput" class="results-output">
            {move || {
                let Some(rows) = rows.get() else {
                    return view! { <></> }.into_any();
                };
                match ResultTable::from_rows(&rows) {
                    Some(table) => render_table(table),
                    None => view! {
                        <p class="no-results">{NO_RESULTS_MESSAGE}</p>
                    }
                        .into_any(),
                }
            }}
        </div>
    }
}

fn render_table(table: ResultTable) -> AnyView {
    let ResultTable { columns, rows } = table;
    view! {
        <table class="results-table">
            <thead>
                <tr>
                    {columns
                        .into_iter()
                        .map(|column| view! { <th>{column}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|cells| {
                        view! {
                            <tr>
                                {cells
                                    .into_iter()
                                    .map(|cell| view! { <td>{cell}</td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
