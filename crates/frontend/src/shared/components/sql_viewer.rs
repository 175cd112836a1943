use crate::shared::icons::icon;
use leptos::prelude::*;

pub const SQL_PLACEHOLDER: &str = "No SQL generated";

/// Text shown in the preview; the returned SQL verbatim or the placeholder
pub fn preview_text(sql: Option<&str>) -> String {
    match sql {
        Some(sql) if !sql.trim().is_empty() => sql.to_string(),
        _ => SQL_PLACEHOLDER.to_string(),
    }
}

#[component]
pub fn SqlViewer(
    /// SQL of the last answer, `None` until a query has answered
    #[prop(into)]
    sql: Signal<Option<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="sql-viewer-container">
            {move || {
                sql.get()
                    .map(|sql| {
                        let text = preview_text(sql.as_deref());
                        let copy_text = text.clone();
                        view! {
                            <div class="sql-content">
                                <button
                                    class="sql-copy-btn"
                                    on:click=move |_| {
                                        if let Some(window) = web_sys::window() {
                                            let nav = window.navigator().clipboard();
                                            let _ = nav.write_text(&copy_text);
                                        }
                                    }
                                >
                                    {icon("copy")}
                                    " Copy"
                                </button>
                                <pre id="sqlOutput" class="sql-query">{text}</pre>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_is_kept_verbatim() {
        let sql = "SELECT drivers.\"forename\"\nFROM drivers  LIMIT 1;";
        assert_eq!(preview_text(Some(sql)), sql);
    }

    #[test]
    fn test_placeholder_when_absent() {
        assert_eq!(preview_text(None), SQL_PLACEHOLDER);
        assert_eq!(preview_text(Some("   ")), SQL_PLACEHOLDER);
    }
}
