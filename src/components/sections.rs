//! Anchored landing page sections.
//!
//! Each section registers its mounted element with the anchor registry via
//! [`use_section_anchor`], making it a scroll target for the navbar. The
//! landing page clears the registry when it unmounts.

use leptos::prelude::*;

use crate::state::sections::SectionId;
use crate::util::scroll::use_section_anchor;

#[component]
pub fn AboutSection() -> impl IntoView {
    let anchor = use_section_anchor(SectionId::About);

    view! {
        <section id=SectionId::About.anchor() class="section" node_ref=anchor>
            <h2>"About autoEDA"</h2>
            <p class="section__lead">
                "Exploratory data analysis is the slowest part of every modeling project. "
                "autoEDA runs it for you: drop in a dataset and get profiling, cleaning "
                "suggestions, and model-ready features back in seconds."
            </p>
            <div class="section__grid">
                <div class="card">
                    <h3>"Target Detection"</h3>
                    <p>"Heuristics pick the most likely target column so you can start from a sensible default."</p>
                </div>
                <div class="card">
                    <h3>"Summary Statistics"</h3>
                    <p>"Per-column distributions, missing-value counts, and correlations at a glance."</p>
                </div>
                <div class="card">
                    <h3>"Encoding & Scaling"</h3>
                    <p>"Categorical encoding and numeric scaling chosen to match each column's shape."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    let anchor = use_section_anchor(SectionId::HowItWorks);

    view! {
        <section id=SectionId::HowItWorks.anchor() class="section section--alt" node_ref=anchor>
            <h2>"How It Works"</h2>
            <ol class="steps">
                <li>
                    <strong>"Upload"</strong>
                    <p>"Bring a CSV from the dashboard. Nothing is stored beyond your session."</p>
                </li>
                <li>
                    <strong>"Analyze"</strong>
                    <p>"The model profiles every column, flags the target, and proposes transformations."</p>
                </li>
                <li>
                    <strong>"Export"</strong>
                    <p>"Download the cleaned dataset and a report of every decision made."</p>
                </li>
            </ol>
        </section>
    }
}

/// Anchor target for the model demo. The upload flow itself lives behind
/// the dashboard; this section only needs to be scrollable to.
#[component]
pub fn TryModelSection() -> impl IntoView {
    let anchor = use_section_anchor(SectionId::TryModel);

    view! {
        <section id=SectionId::TryModel.anchor() class="section" node_ref=anchor>
            <h2>"Try Our Model"</h2>
            <p class="section__lead">
                "Sign in and upload a dataset to watch autoEDA work on your own data."
            </p>
            <a href="/auth" class="btn btn--primary section__cta">
                "Upload a Dataset"
            </a>
        </section>
    }
}

#[component]
pub fn ReviewSection() -> impl IntoView {
    let anchor = use_section_anchor(SectionId::Review);

    view! {
        <section id=SectionId::Review.anchor() class="section section--alt" node_ref=anchor>
            <h2>"What Users Say"</h2>
            <div class="section__grid">
                <blockquote class="review">
                    <p>"Cut our dataset triage from a day to a coffee break."</p>
                    <cite>"— data science lead, fintech"</cite>
                </blockquote>
                <blockquote class="review">
                    <p>"The encoding suggestions alone were worth it."</p>
                    <cite>"— ML engineer, retail analytics"</cite>
                </blockquote>
                <blockquote class="review">
                    <p>"Finally an EDA report I can hand straight to stakeholders."</p>
                    <cite>"— analyst, healthcare"</cite>
                </blockquote>
            </div>
        </section>
    }
}
