use leptos::*;
use leptos_router::use_navigate;

use crate::state::{CartState, OrderState};
use crate::utils::format_thb;

#[component]
pub fn BasketPage() -> impl IntoView {
    let cart = expect_context::<CartState>();
    let orders = expect_context::<OrderState>();
    let navigate = use_navigate();

    let items = cart.items;
    let total = {
        let cart = cart.clone();
        move || format_thb(cart.estimated_total_thb())
    };

    let place_order = {
        let cart = cart.clone();
        move |_: ev::MouseEvent| {
            let lines = cart.items.get_untracked();
            if lines.is_empty() {
                return;
            }
            orders.place(lines);
            cart.clear();
            navigate("/orders", Default::default());
        }
    };

    view! {
        <div class="page">
            <h1>"Your basket"</h1>
            <Show
                when=move || !items.with(|lines| lines.is_empty())
                fallback=|| {
                    view! {
                        <div class="empty-state card">
                            <p>"Your basket is empty."</p>
                            <a href="/tools" class="btn btn-primary">"Browse tools"</a>
                        </div>
                    }
                }
            >
                <div class="basket-lines">
                    {
                        let cart = cart.clone();
                        move || {
                            items
                                .get()
                                .into_iter()
                                .map(|line| {
                                    let tool_id = line.tool.id;
                                    let decrement = {
                                        let cart = cart.clone();
                                        let quantity = line.quantity;
                                        move |_| {
                                            cart.set_quantity(tool_id, quantity.saturating_sub(1))
                                        }
                                    };
                                    let increment = {
                                        let cart = cart.clone();
                                        let quantity = line.quantity;
                                        move |_| cart.set_quantity(tool_id, quantity + 1)
                                    };
                                    let remove = {
                                        let cart = cart.clone();
                                        move |_| cart.remove(tool_id)
                                    };

                                    view! {
                                        <div class="card basket-line">
                                            <div class="basket-line-info">
                                                <h3>{line.tool.name.clone()}</h3>
                                                <p class="text-muted">
                                                    {format_thb(line.tool.daily_rate_thb)} " / day"
                                                </p>
                                            </div>
                                            <div class="basket-line-controls">
                                                <button class="btn btn-outline" on:click=decrement>
                                                    "−"
                                                </button>
                                                <span class="basket-quantity">{line.quantity}</span>
                                                <button class="btn btn-outline" on:click=increment>
                                                    "+"
                                                </button>
                                                <button class="btn btn-danger" on:click=remove>
                                                    "Remove"
                                                </button>
                                            </div>
                                            <span class="basket-line-total">
                                                {format_thb(line.line_total_thb())}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </div>

                <div class="card basket-summary">
                    <div class="basket-summary-row">
                        <span>"Estimated daily total"</span>
                        <span class="basket-total">{total.clone()}</span>
                    </div>
                    <button class="btn btn-primary" on:click=place_order.clone()>
                        "Place order"
                    </button>
                </div>
            </Show>
        </div>
    }
}
