//! Landing page navigation bar with a collapsible mobile menu.
//!
//! The open/closed state lives in [`crate::state::menu`] as a closed
//! transition table; this component owns the signal, dispatches events, and
//! performs the emitted action (scroll or navigate) before storing the next
//! state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{AnchorRegistry, ThemeSignal};
use crate::state::menu::{MenuAction, MenuEvent, MenuState};
use crate::state::route::Route;
use crate::state::sections::SectionId;
use crate::util::theme;

/// Navigation bar: brand, section links, route links, and the mobile
/// hamburger toggle. Selecting any item closes the mobile menu.
#[component]
pub fn NavBar() -> impl IntoView {
    let registry = expect_context::<AnchorRegistry>();
    let dark = expect_context::<ThemeSignal>();
    let menu = RwSignal::new(MenuState::default());
    let navigate = use_navigate();

    let dispatch = Callback::new(move |event: MenuEvent| {
        let (next, action) = menu.get_untracked().apply(event);
        match action {
            Some(MenuAction::ScrollTo(id)) => {
                // Unmounted or stale anchors are a designed no-op.
                if !registry.with_untracked(|r| r.scroll_to(id)) {
                    log::debug!("no live anchor for section {}", id.anchor());
                }
            }
            Some(MenuAction::Navigate(route)) => {
                navigate(route.path(), NavigateOptions::default());
            }
            None => {}
        }
        menu.set(next);
    });

    let on_theme = move |_| {
        dark.set(theme::toggle(dark.get_untracked()));
    };

    view! {
        <nav class="navbar">
            <button
                class="navbar__brand"
                on:click=move |_| dispatch.run(MenuEvent::SelectRoute(Route::Home))
            >
                <span class="navbar__logo"></span>
                "autoEDA"
            </button>

            <button
                class="navbar__hamburger"
                aria-label="Toggle navigation menu"
                aria-expanded=move || menu.get().is_open()
                on:click=move |_| dispatch.run(MenuEvent::Toggle)
            >
                {move || if menu.get().is_open() { "\u{2715}" } else { "\u{2630}" }}
            </button>

            <div class="navbar__links" class=("navbar__links--open", move || menu.get().is_open())>
                {SectionId::ALL
                    .into_iter()
                    .map(|id| {
                        view! {
                            <button
                                class="navbar__link"
                                on:click=move |_| dispatch.run(MenuEvent::SelectSection(id))
                            >
                                {id.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}

                <button
                    class="navbar__link"
                    on:click=move |_| dispatch.run(MenuEvent::SelectRoute(Route::Contact))
                >
                    "Contact"
                </button>

                <button class="navbar__theme" aria-label="Toggle theme" on:click=on_theme>
                    {move || if dark.get() { "\u{2600}" } else { "\u{263E}" }}
                </button>

                <button
                    class="btn btn--primary navbar__cta"
                    on:click=move |_| dispatch.run(MenuEvent::SelectRoute(Route::Auth))
                >
                    "Get Started"
                </button>
            </div>
        </nav>
    }
}
