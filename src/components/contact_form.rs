//! Contact form: field editing, validation, and the acknowledgment cycle.
//!
//! The validate → submit → acknowledge → reset machine lives in
//! [`crate::state::contact`]; this component binds the inputs, renders the
//! inline error and acknowledgment, and owns the one-shot reset timer. The
//! "send" is simulated entirely client-side — no request leaves the page.

use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::contact::{ACK_RESET_MS, ContactFormState, Field, Subject, SubmitStatus};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    // Pending acknowledgment reset, scoped to this instance's lifetime.
    let reset_timer: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let edit = move |field: Field| {
        move |ev: leptos::ev::Event| {
            form.update(|f| f.set_field(field, event_target_value(&ev)));
        }
    };

    let on_subject = move |ev: leptos::ev::Event| {
        let selection = Subject::from_value(&event_target_value(&ev));
        form.update(|f| f.select_subject(selection));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.submit());

        if form.with_untracked(|f| f.status == SubmitStatus::Acknowledged) {
            let handle = Timeout::new(ACK_RESET_MS, move || {
                // The form may have unmounted before the window elapsed; a
                // disposed signal is a silent no-op.
                let _ = form.try_update(|f| f.acknowledge_elapsed());
            });
            reset_timer.update_value(|slot| {
                if let Some(prev) = slot.replace(handle) {
                    prev.cancel();
                }
            });
        }
    };

    on_cleanup(move || {
        reset_timer.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
    });

    let status = move || form.get().status;

    view! {
        <form class="contact-form" on:submit=on_submit>
            <div class="contact-form__row">
                <input
                    class="contact-form__input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || form.get().fields.name
                    on:input=edit(Field::Name)
                />
                <input
                    class="contact-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.get().fields.email
                    on:input=edit(Field::Email)
                />
            </div>

            <select
                class="contact-form__select"
                prop:value=move || form.get().fields.subject
                on:change=on_subject
            >
                // Placeholder only; never a valid selection.
                <option value="" disabled=true>
                    "Select subject"
                </option>
                {Subject::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.value()>{s.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>

            <textarea
                class="contact-form__message"
                placeholder="Your message..."
                rows=4
                prop:value=move || form.get().fields.message
                on:input=edit(Field::Message)
            ></textarea>

            <Show when=move || status() == SubmitStatus::Error>
                <div class="contact-form__error">"Please fill in all fields."</div>
            </Show>

            <button type="submit" class="btn btn--primary contact-form__send">
                "Send Message"
            </button>

            <Show when=move || status() == SubmitStatus::Acknowledged>
                <div class="contact-form__ack">
                    <span class="contact-form__ack-icon">"\u{2713}"</span>
                    "Thank you! Your message has been sent."
                </div>
            </Show>
        </form>
    }
}
