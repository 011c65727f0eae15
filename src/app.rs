//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    auth::AuthPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage,
};
use crate::state::sections::SectionRegistry;
use crate::util::scroll::SectionAnchor;
use crate::util::theme;

/// Section anchor registry, dependency-injected through context so liveness
/// and lifetime are explicit rather than ambient global state.
pub type AnchorRegistry = RwSignal<SectionRegistry<SectionAnchor>, LocalStorage>;

/// Dark mode flag provided to the navbar's theme toggle.
pub type ThemeSignal = RwSignal<bool>;

/// Root application component.
///
/// Provides the section registry and theme contexts and sets up client-side
/// routing. Every unmatched path renders the landing page — there is no
/// not-found view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let registry: AnchorRegistry = RwSignal::new_local(SectionRegistry::new());
    provide_context(registry);

    let dark: ThemeSignal = RwSignal::new(theme::read_preference());
    theme::apply(dark.get_untracked());
    provide_context(dark);

    view! {
        <Title text="autoEDA - Automated Exploratory Data Analysis"/>
        <Meta
            name="description"
            content="Upload a dataset and let autoEDA detect your target column, summarize, encode, and scale it automatically."
        />

        <Router>
            <Routes fallback=|| view! { <HomePage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
            </Routes>
        </Router>
    }
}
