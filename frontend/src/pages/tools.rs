use leptos::*;

use crate::catalog::rental_catalog;
use crate::state::CartState;
use crate::utils::format_thb;

#[component]
pub fn ToolsPage() -> impl IntoView {
    let cart = expect_context::<CartState>();

    view! {
        <div class="page">
            <h1>"Tools for rent"</h1>
            <div class="tool-grid">
                {rental_catalog()
                    .into_iter()
                    .map(|tool| {
                        let cart = cart.clone();
                        let to_add = tool.clone();
                        view! {
                            <div class="card tool-card">
                                <h3>{tool.name}</h3>
                                <p class="text-muted">{tool.category}</p>
                                <p class="tool-rate">{format_thb(tool.daily_rate_thb)} " / day"</p>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| cart.add(to_add.clone())
                                >
                                    "Add to basket"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
