use leptos::*;
use leptos_router::*;

use crate::components::navbar::Navbar;
use crate::pages::{
    basket::BasketPage, home::HomePage, orders::OrdersPage, staff::StaffPage, tools::ToolsPage,
};
use crate::state::{CartState, OrderState};

#[component]
pub fn App() -> impl IntoView {
    // Client-side stores, shared with every page through context. The navbar
    // only reads them; pages own all mutation.
    provide_context(CartState::new());
    provide_context(OrderState::new());

    view! {
        <Router>
            <Navbar />
            <main class="container page-content">
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/tools" view=ToolsPage />
                    <Route path="/orders" view=OrdersPage />
                    <Route path="/staff" view=StaffPage />
                    <Route path="/basket" view=BasketPage />
                </Routes>
            </main>
        </Router>
    }
}
