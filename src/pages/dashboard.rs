//! Dashboard page. The upload-and-analyze flow is served by the model
//! backend; this page is only a mount target for the `/dashboard` route.

use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <a href="/" class="dashboard-page__back">
                    "\u{2190} Back to home"
                </a>
            </header>
            <p>"Upload a dataset to start an analysis."</p>
        </div>
    }
}
