use crate::usecases::u508_nl_query::QueryConsole;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <QueryConsole />
        </main>
    }
}
