use leptos::*;

use crate::catalog::rental_catalog;
use crate::utils::format_thb;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured: Vec<_> = rental_catalog().into_iter().take(3).collect();

    view! {
        <div class="page home-page">
            <section class="hero card">
                <h1>"Rent pro tools, delivered to your site"</h1>
                <p class="text-muted">
                    "Tool2U delivers rental power tools and equipment across Bangkok, "
                    "usually within three hours."
                </p>
                <a href="/tools" class="btn btn-primary">"Browse tools"</a>
            </section>

            <section class="featured">
                <h2>"Popular this week"</h2>
                <div class="tool-grid">
                    {featured
                        .into_iter()
                        .map(|tool| {
                            view! {
                                <div class="card tool-card">
                                    <h3>{tool.name}</h3>
                                    <p class="text-muted">{tool.category}</p>
                                    <p class="tool-rate">
                                        {format_thb(tool.daily_rate_thb)} " / day"
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
