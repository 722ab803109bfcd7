use leptos::*;

/// Brand mark shown next to the store name in the navbar.
#[component]
pub fn Logo(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class.unwrap_or_else(|| "logo".to_string()) viewBox="0 0 40 40" fill="none" aria-hidden="true">
            <rect x="1" y="1" width="38" height="38" rx="8" fill="#FFD700"></rect>
            <path
                d="M12 26l10-10m0 0h-4m4 0v4m-10 2l4 4"
                stroke="#1a1a1a"
                stroke-width="2.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            ></path>
        </svg>
    }
}
