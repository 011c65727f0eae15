//! DOM-backed scroll targets for the section registry.
//!
//! The registry itself is DOM-agnostic ([`crate::state::sections`]); this
//! module supplies the browser implementation and the mount-time
//! registration hook used by the landing page sections.

use leptos::html;
use leptos::prelude::*;

use crate::app::AnchorRegistry;
use crate::state::sections::{ScrollTarget, SectionId};

/// A mounted section anchor in the document.
#[derive(Clone, Debug)]
pub struct SectionAnchor {
    element: web_sys::Element,
}

impl SectionAnchor {
    pub fn new(element: web_sys::Element) -> Self {
        Self { element }
    }
}

impl ScrollTarget for SectionAnchor {
    /// A detached element (left over from a previous mount) is not a valid
    /// scroll target.
    fn is_live(&self) -> bool {
        self.element.is_connected()
    }

    /// Smooth scroll, anchor top to viewport top. The browser cancels an
    /// in-flight smooth scroll when a new one starts, so the latest call
    /// wins without any queuing here.
    fn scroll_to_top(&self) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        self.element
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Bind a section's anchor element to the registry.
///
/// Returns the `NodeRef` to place on the section element. Registration runs
/// once the element mounts; re-mounting registers the fresh element,
/// superseding the old entry.
pub fn use_section_anchor(id: SectionId) -> NodeRef<html::Section> {
    let registry = expect_context::<AnchorRegistry>();
    let anchor = NodeRef::new();

    Effect::new(move || {
        if let Some(el) = anchor.get() {
            log::debug!("section anchor mounted: {}", id.anchor());
            let element = web_sys::Element::from(el);
            registry.update(|r| r.register(id, SectionAnchor::new(element)));
        }
    });

    anchor
}
