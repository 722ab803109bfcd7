//! Inline SVG icons, stroked with `currentColor` so they follow the link color.

use leptos::*;

#[component]
pub fn CartIcon(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class.unwrap_or_else(|| "icon".to_string()) viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <circle cx="8" cy="21" r="1"></circle>
            <circle cx="19" cy="21" r="1"></circle>
            <path d="M2 2h2l2.6 12.4a2 2 0 0 0 2 1.6h9.7a2 2 0 0 0 2-1.6L22 7H5"></path>
        </svg>
    }
}

#[component]
pub fn WrenchIcon(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class.unwrap_or_else(|| "icon".to_string()) viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94z"></path>
        </svg>
    }
}

#[component]
pub fn PackageIcon(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class.unwrap_or_else(|| "icon".to_string()) viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"></path>
            <path d="M3.3 7l8.7 5 8.7-5"></path>
            <path d="M12 22V12"></path>
        </svg>
    }
}

#[component]
pub fn UserIcon(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class.unwrap_or_else(|| "icon".to_string()) viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"></path>
            <circle cx="12" cy="7" r="4"></circle>
        </svg>
    }
}

#[component]
pub fn MenuIcon(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class.unwrap_or_else(|| "icon icon-lg".to_string()) viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <line x1="4" y1="6" x2="20" y2="6"></line>
            <line x1="4" y1="12" x2="20" y2="12"></line>
            <line x1="4" y1="18" x2="20" y2="18"></line>
        </svg>
    }
}

#[component]
pub fn CloseIcon(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    view! {
        <svg class=class.unwrap_or_else(|| "icon icon-lg".to_string()) viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <line x1="18" y1="6" x2="6" y2="18"></line>
            <line x1="6" y1="6" x2="18" y2="18"></line>
        </svg>
    }
}
