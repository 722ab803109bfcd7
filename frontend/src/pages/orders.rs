use leptos::*;

use crate::components::badge::StatusBadge;
use crate::state::OrderState;
use crate::utils::format_thb;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders = expect_context::<OrderState>();
    let order_list = orders.orders;

    view! {
        <div class="page">
            <h1>"Your orders"</h1>
            <Show
                when=move || !order_list.with(|o| o.is_empty())
                fallback=|| {
                    view! {
                        <div class="empty-state card">
                            <p>"No orders yet."</p>
                            <a href="/tools" class="btn btn-primary">"Browse tools"</a>
                        </div>
                    }
                }
            >
                <div class="order-list">
                    {move || {
                        order_list
                            .get()
                            .into_iter()
                            .map(|order| {
                                let summary = order
                                    .lines
                                    .iter()
                                    .map(|line| {
                                        format!("{} × {}", line.quantity, line.tool.name)
                                    })
                                    .collect::<Vec<_>>()
                                    .join(", ");

                                view! {
                                    <div class="card order-card">
                                        <div class="order-card-header">
                                            <span class="order-reference">
                                                "#" {order.reference()}
                                            </span>
                                            <StatusBadge status=order.status />
                                        </div>
                                        <p class="text-muted">{summary}</p>
                                        <div class="order-card-footer">
                                            <span class="text-muted">
                                                {order.placed_at.format("%d %b %Y %H:%M").to_string()}
                                            </span>
                                            <span class="order-total">
                                                {format_thb(order.total_thb())}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
