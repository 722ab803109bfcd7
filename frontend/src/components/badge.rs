use leptos::*;
use shared::OrderStatus;

/// Small red counter bubble used on the Orders link and the cart icons.
/// Renders nothing at all while the count is zero.
#[component]
pub fn CountBadge(#[prop(into)] count: Signal<u32>) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 0 } fallback=|| ()>
            <span class="count-badge">{move || count.get()}</span>
        </Show>
    }
}

pub fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge-warning",
        OrderStatus::Processing => "badge badge-info",
        OrderStatus::PaymentVerification => "badge badge-warning",
        OrderStatus::Shipped => "badge badge-info",
        OrderStatus::Delivered => "badge badge-success",
        OrderStatus::Cancelled => "badge badge-danger",
    }
}

/// Status label for an order's lifecycle state.
#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=status_badge_class(status)>{status.label()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_settled_statuses_do_not_look_actionable() {
        assert_eq!(status_badge_class(OrderStatus::Delivered), "badge badge-success");
        assert_eq!(status_badge_class(OrderStatus::Cancelled), "badge badge-danger");
    }

    #[wasm_bindgen_test]
    fn test_in_progress_statuses_use_attention_colors() {
        assert_eq!(status_badge_class(OrderStatus::Pending), "badge badge-warning");
        assert_eq!(status_badge_class(OrderStatus::Processing), "badge badge-info");
        assert_eq!(
            status_badge_class(OrderStatus::PaymentVerification),
            "badge badge-warning"
        );
    }
}
