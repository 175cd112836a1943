use super::api::{self, QueryError};
use super::controls::{Control, ControlRegistry};
use super::state::{LoadingGuard, QueryConsoleState, SubmitKind};
use crate::shared::components::{PaginationControls, ResultsChart, ResultsTable, SqlViewer};
use crate::shared::debounce::{BrowserTimers, Debouncer};
use crate::shared::export::{export_to_csv, EXPORT_FILENAME};
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_nl_query::NlQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Quiet period before a burst of submit triggers turns into one request
pub const SUBMIT_DEBOUNCE_MS: u32 = 300;

/// Runs one submission: validation, request, then state updates
///
/// Responses are applied in arrival order; a late answer overwrites an
/// earlier one. A failed request puts the pagination cursor back.
fn submit(state: QueryConsoleState, kind: SubmitKind) {
    state.error.set(None);

    let (request, previous) = match state.begin_submission(kind) {
        Ok(started) => started,
        Err(e) => {
            state.show_error(&e);
            return;
        }
    };

    log::debug!("Submitting query {:?} (page {:?})", request.query, request.page);
    let loading = LoadingGuard::start(state.loading);

    spawn_local(async move {
        let _loading = loading;
        match api::run_query(&request).await {
            Ok(response) => {
                state
                    .pagination
                    .update(|p| p.apply_total(response.total_pages));
                let rows = response.total_count.unwrap_or(response.results.len() as u64);
                if kind == SubmitKind::Fresh {
                    state.show_toast(format!("Query returned {} rows", rows));
                }
                state.response.set(Some(response));
            }
            Err(e) => {
                log::error!("Query failed: {}", e);
                // rows on screen still belong to the previous cursor
                state.restore(previous);
                state.show_error(&e);
            }
        }
    });
}

fn export(state: QueryConsoleState) {
    let Some(rows) = state
        .response
        .with_untracked(|r| r.as_ref().map(|r| r.results.clone()))
    else {
        return;
    };

    match export_to_csv(&rows, EXPORT_FILENAME) {
        Ok(()) => {
            log::debug!("Exported {} rows", rows.len());
            state.show_toast(format!("Exported {} rows to {}", rows.len(), EXPORT_FILENAME));
        }
        Err(e) => {
            log::error!("Export failed: {}", e);
            state.error.set(Some(format!("Export failed: {}", e)));
        }
    }
}

#[component]
pub fn QueryConsole() -> impl IntoView {
    let state = QueryConsoleState::new();

    let debouncer = StoredValue::new_local(Debouncer::new(
        BrowserTimers,
        SUBMIT_DEBOUNCE_MS,
        move |kind| submit(state, kind),
    ));
    let trigger = move |kind: SubmitKind| debouncer.update_value(|d| d.trigger(kind));

    let controls = ControlRegistry::new()
        .register(Control::Submit, move || {
            // blank input is reported at once instead of after the quiet period
            if state.query_text.get_untracked().trim().is_empty() {
                debouncer.update_value(|d| d.cancel());
                state.show_error(&QueryError::EmptyQuery);
                return;
            }
            trigger(SubmitKind::Fresh);
        })
        .register(Control::PreviousPage, move || {
            let pagination = state.pagination.get_untracked();
            if pagination.has_previous() {
                trigger(SubmitKind::PageChange(pagination.current_page - 1));
            }
        })
        .register(Control::NextPage, move || {
            let pagination = state.pagination.get_untracked();
            if pagination.has_next() {
                trigger(SubmitKind::PageChange(pagination.current_page + 1));
            }
        })
        .register(Control::Export, move || export(state))
        .into_table();

    let rows = Signal::derive(move || {
        state
            .response
            .with(|r| r.as_ref().map(|r| r.results.clone()))
    });
    let sql = Signal::derive(move || {
        state
            .response
            .with(|r| r.as_ref().map(|r| r.sql_text().map(str::to_string)))
    });
    let has_rows = move || state.response.with(|r| r.as_ref().is_some_and(|r| !r.is_empty()));

    view! {
        <div id="u508_nl_query--usecase" class="query-console">
            <h2>{NlQuery::display_name()}</h2>
            <p class="text-muted">{NlQuery::description()}</p>

            <div class="query-form">
                <input
                    id="queryInput"
                    type="text"
                    placeholder="e.g. Who won the most races in 2023?"
                    prop:value=move || state.query_text.get()
                    prop:disabled=move || state.loading.get()
                    on:input=move |ev| state.query_text.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            controls.dispatch(Control::Submit);
                        }
                    }
                />
                <button
                    class="submit-btn"
                    on:click=move |_| controls.dispatch(Control::Submit)
                    prop:disabled=move || state.loading.get()
                >
                    {icon("play")}
                    " Run query"
                </button>
            </div>

            <div id="loading" class="loading" class:hidden=move || !state.loading.get()>
                "Running query..."
            </div>

            <div id="errorOutput" class="error-output" role="alert">
                {move || state.error.get()}
            </div>

            <div id="successOutput" class="success-output" role="status">
                {move || state.toast.get()}
            </div>

            <SqlViewer sql=sql />

            <ResultsTable rows=rows />

            <PaginationControls
                current_page=Signal::derive(move || state.pagination.get().current_page)
                total_pages=Signal::derive(move || state.pagination.get().total_pages)
                total_count=Signal::derive(move || {
                    state.response.with(|r| r.as_ref().and_then(|r| r.total_count))
                })
                busy=state.loading
                on_previous=controls.callback(Control::PreviousPage)
                on_next=controls.callback(Control::NextPage)
            />

            <Show when=has_rows>
                <button
                    id="exportButton"
                    class="export-btn"
                    on:click=move |_| controls.dispatch(Control::Export)
                    prop:disabled=move || state.loading.get()
                >
                    {icon("download")}
                    " Export CSV"
                </button>
            </Show>

            <ResultsChart rows=rows />
        </div>
    }
}
