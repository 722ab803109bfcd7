use leptos::*;

#[component]
pub fn StaffPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Staff & support"</h1>
            <div class="card">
                <p>
                    "Our delivery and support team operates daily from 08:00 to 20:00. "
                    "For urgent help with a rental, call the hotline below."
                </p>
                <ul class="staff-contacts">
                    <li>"Hotline: 02-123-4567"</li>
                    <li>"LINE: @tool2u"</li>
                    <li>"Email: support@tool2u.example"</li>
                </ul>
            </div>
        </div>
    }
}
