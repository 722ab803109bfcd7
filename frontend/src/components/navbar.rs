use leptos::*;
use leptos_router::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::badge::CountBadge;
use crate::components::icons::{CartIcon, CloseIcon, MenuIcon, PackageIcon, UserIcon, WrenchIcon};
use crate::components::logo::Logo;
use crate::state::{CartState, OrderState};

/// Scroll offset (px) past which the header switches to its compact style.
const SCROLL_THRESHOLD_PX: f64 = 10.0;

fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "site-header site-header-scrolled"
    } else {
        "site-header"
    }
}

// Menu state machine: {Closed, Open}. The toggle button flips it; any
// navigation forces it closed.
fn menu_toggled(open: bool) -> bool {
    !open
}

fn menu_after_navigation(_open: bool) -> bool {
    false
}

/// Fixed page header: brand, primary links with live badge counters, and a
/// collapsible menu for small screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let cart = expect_context::<CartState>();
    let orders = expect_context::<OrderState>();
    let location = use_location();

    let is_menu_open = create_rw_signal(false);
    let is_scrolled = create_rw_signal(false);

    let total_items = {
        let cart = cart.clone();
        Signal::derive(move || cart.total_items())
    };
    let pending_orders = {
        let orders = orders.clone();
        Signal::derive(move || orders.pending_count())
    };

    // Track the window scroll offset while mounted. The listener is removed
    // on cleanup so repeated mounts never leave a dangling handler behind.
    let handler = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let offset = window.scroll_y().unwrap_or(0.0);
            is_scrolled.set(is_past_threshold(offset));
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
    }

    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
        }
        drop(handler);
    });

    // Close the menu whenever navigation happens, programmatic or not.
    create_effect(move |_| {
        let _path = location.pathname.get();
        is_menu_open.update(|open| *open = menu_after_navigation(*open));
    });

    view! {
        <header class=move || header_class(is_scrolled.get())>
            <div class="container navbar-content">
                <A href="/" class="navbar-brand">
                    <Logo class="navbar-logo" />
                    <span class="navbar-title">"Tool2U"</span>
                </A>

                <nav class="navbar-links nav-desktop">
                    <A href="/" class="nav-link">"Home"</A>
                    <A href="/tools" class="nav-link">
                        <WrenchIcon class="icon icon-sm" />
                        "Tools"
                    </A>
                    <A href="/orders" class="nav-link">
                        <PackageIcon class="icon icon-sm" />
                        "Orders"
                        <CountBadge count=pending_orders />
                    </A>
                    <A href="/staff" class="nav-link">
                        <UserIcon class="icon icon-sm" />
                        "Staff"
                    </A>
                    <A href="/basket" class="nav-link navbar-cart">
                        <CartIcon class="icon" />
                        <CountBadge count=total_items />
                    </A>
                </nav>

                <div class="nav-mobile">
                    <A href="/basket" class="nav-link navbar-cart">
                        <CartIcon class="icon" />
                        <CountBadge count=total_items />
                    </A>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| is_menu_open.update(|open| *open = menu_toggled(*open))
                    >
                        <Show when=move || is_menu_open.get() fallback=|| view! { <MenuIcon /> }>
                            <CloseIcon />
                        </Show>
                    </button>
                </div>
            </div>

            <Show when=move || is_menu_open.get() fallback=|| ()>
                <div class="mobile-menu">
                    <nav class="mobile-menu-links container">
                        <A href="/" class="nav-link">"Home"</A>
                        <A href="/tools" class="nav-link">
                            <WrenchIcon class="icon icon-sm" />
                            "Tools"
                        </A>
                        <A href="/orders" class="nav-link">
                            <PackageIcon class="icon icon-sm" />
                            "Orders"
                            <CountBadge count=pending_orders />
                        </A>
                        <A href="/staff" class="nav-link">
                            <UserIcon class="icon icon-sm" />
                            "Staff"
                        </A>
                    </nav>
                </div>
            </Show>
        </header>
    }
}
