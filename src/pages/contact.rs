//! Contact page wrapping the form card and the direct-contact links.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <div class="card contact-page__card">
                <h2>"Contact Us"</h2>
                <p class="contact-page__intro">
                    "We'd love to hear from you! Fill out the form below or reach us via the links."
                </p>

                <ContactForm/>

                <div class="contact-page__channels">
                    <span>"Or reach us at:"</span>
                    <a href="mailto:contact@autoeda.com">"contact@autoeda.com"</a>
                    <a href="https://github.com/autoeda" target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                    <a
                        href="https://linkedin.com/company/autoeda"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </div>
    }
}
