//! Authentication page. The sign-in flow itself is an external concern;
//! this page is only a mount target for the `/auth` route.

use leptos::prelude::*;

#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="card auth-page__card">
                <h1>"autoEDA"</h1>
                <p>"Sign in to upload datasets and run analyses."</p>
                <a href="/dashboard" class="btn btn--primary">
                    "Continue to Dashboard"
                </a>
                <a href="/" class="auth-page__back">
                    "\u{2190} Back to home"
                </a>
            </div>
        </div>
    }
}
