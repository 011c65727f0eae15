//! Landing page — navbar, hero, and the four anchored sections.

use leptos::prelude::*;

use crate::app::AnchorRegistry;
use crate::components::navbar::NavBar;
use crate::components::sections::{
    AboutSection, HowItWorksSection, ReviewSection, TryModelSection,
};

/// Landing page. Sections register their anchors as they mount; the
/// registrations are invalidated when the page unmounts so a later
/// scroll request cannot target a detached element.
#[component]
pub fn HomePage() -> impl IntoView {
    let registry = expect_context::<AnchorRegistry>();

    on_cleanup(move || {
        registry.update(|r| r.clear());
    });

    view! {
        <div class="home-page">
            <NavBar/>
            <Hero/>
            <AboutSection/>
            <HowItWorksSection/>
            <TryModelSection/>
            <ReviewSection/>
            <Footer/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>"Understand Your Data" <br/> "Before You Model It"</h1>
            <p class="hero__tagline">
                "autoEDA profiles, cleans, and prepares your dataset automatically — "
                "target detection, summary statistics, encoding, and scaling in one pass."
            </p>
            <a href="/auth" class="btn btn--primary hero__cta">
                "Get Started"
            </a>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"autoEDA — automated exploratory data analysis"</p>
            <p class="footer__links">
                <a href="mailto:contact@autoeda.com">"contact@autoeda.com"</a>
                " · "
                <a href="/contact">"Contact"</a>
            </p>
        </footer>
    }
}
