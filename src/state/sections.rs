#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::collections::HashMap;

/// Named, anchorable regions of the landing page.
///
/// The set is fixed at compile time; each section registers its mounted
/// anchor element under its id so the navigation menu can scroll to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    HowItWorks,
    TryModel,
    Review,
}

impl SectionId {
    pub const ALL: [Self; 4] = [Self::About, Self::HowItWorks, Self::TryModel, Self::Review];

    /// DOM id of the section's anchor element.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::HowItWorks => "how-it-works",
            Self::TryModel => "try-model",
            Self::Review => "review",
        }
    }

    /// Label shown in the navigation menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::HowItWorks => "How It Works",
            Self::TryModel => "Try Our Model",
            Self::Review => "Review",
        }
    }
}

/// A scrollable anchor the registry can target.
///
/// Abstracts over `web_sys::Element` so the registry contract is testable
/// without a DOM. A target that is no longer attached to the document must
/// report `is_live() == false`.
pub trait ScrollTarget {
    fn is_live(&self) -> bool;

    /// Smooth-scroll the viewport so the target's top edge aligns with the
    /// viewport top. Interruption is the scroller's concern: a later call
    /// wins, there is no queue.
    fn scroll_to_top(&self);
}

/// Mapping from section ids to their mounted anchors.
///
/// Entries appear as sections mount and are cleared when the landing page
/// unmounts. Scrolling to an id with no live entry is a silent no-op.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry<T> {
    targets: HashMap<SectionId, T>,
}

impl<T: ScrollTarget> SectionRegistry<T> {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    /// Associate a section with its mounted anchor, replacing any prior
    /// association for the same id.
    pub fn register(&mut self, id: SectionId, target: T) {
        self.targets.insert(id, target);
    }

    /// Drop all registrations (landing page unmount).
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn is_registered(&self, id: SectionId) -> bool {
        self.targets.contains_key(&id)
    }

    /// Scroll to the section's anchor if one is registered and still
    /// attached to the document. Returns whether a scroll was issued; a
    /// missing or stale target is a no-op, never an error.
    pub fn scroll_to(&self, id: SectionId) -> bool {
        match self.targets.get(&id) {
            Some(target) if target.is_live() => {
                target.scroll_to_top();
                true
            }
            _ => false,
        }
    }
}
