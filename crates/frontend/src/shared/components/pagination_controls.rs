use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - Previous/Next navigation over a paged result
///
/// Hidden when there is a single page. Buttons are disabled at the matching
/// boundary and while `busy` is set.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of rows across all pages, when known
    #[prop(into)]
    total_count: Signal<Option<u64>>,

    /// Disables both buttons while a request is outstanding
    #[prop(into)]
    busy: Signal<bool>,

    on_previous: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    move || {
        if total_pages.get() <= 1 {
            return None;
        }

        Some(view! {
            <div id="pagination" class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_previous.run(())
                    disabled=move || busy.get() || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                    " Previous"
                </button>
                <span class="pagination-info">
                    {move || {
                        let label = format!("Page {} of {}", current_page.get(), total_pages.get());
                        match total_count.get() {
                            Some(count) => format!("{} ({} rows)", label, count),
                            None => label,
                        }
                    }}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_next.run(())
                    disabled=move || { busy.get() || current_page.get() >= total_pages.get() }
                    title="Next page"
                >
                    "Next "
                    {icon("chevron-right")}
                </button>
            </div>
        })
    }
}
