use leptos::prelude::*;

/// 16px stroke icon by name; unknown names render a plain circle
pub fn icon(name: &str) -> AnyView {
    let shape = match name {
        "chevron-left" => view! { <polyline points="15 18 9 12 15 6"/> }.into_any(),
        "chevron-right" => view! { <polyline points="9 18 15 12 9 6"/> }.into_any(),
        "download" => view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <polyline points="7 10 12 15 17 10"/>
            <line x1="12" y1="15" x2="12" y2="3"/>
        }
        .into_any(),
        "copy" => view! {
            <rect x="9" y="9" width="13" height="13" rx="2"/>
            <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>
        }
        .into_any(),
        "play" => view! { <polygon points="6 3 20 12 6 21 6 3"/> }.into_any(),
        _ => view! { <circle cx="12" cy="12" r="10"/> }.into_any(),
    };

    view! {
        <svg
            class="icon"
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shape}
        </svg>
    }
    .into_any()
}
