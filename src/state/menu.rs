#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::state::route::Route;
use crate::state::sections::SectionId;

/// Open/closed state of the collapsible navigation menu.
///
/// Owned exclusively by the navbar component. The wide-viewport layout never
/// exercises `Toggle` (the control is hidden by CSS) but the machine still
/// runs; selection events close an already-closed menu harmlessly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs to the menu state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    SelectSection(SectionId),
    SelectRoute(Route),
}

/// Side effect the component must perform before storing the next state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    ScrollTo(SectionId),
    Navigate(Route),
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// The full transition table. Selection events emit their action and
    /// land in `Closed` regardless of the current state; `Toggle` flips the
    /// state and emits nothing. No other transitions exist.
    pub fn apply(self, event: MenuEvent) -> (Self, Option<MenuAction>) {
        match event {
            MenuEvent::Toggle => {
                let next = match self {
                    Self::Closed => Self::Open,
                    Self::Open => Self::Closed,
                };
                (next, None)
            }
            MenuEvent::SelectSection(id) => (Self::Closed, Some(MenuAction::ScrollTo(id))),
            MenuEvent::SelectRoute(route) => (Self::Closed, Some(MenuAction::Navigate(route))),
        }
    }
}
