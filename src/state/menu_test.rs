use super::*;

// =============================================================
// Toggle
// =============================================================

#[test]
fn initial_state_is_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_opens_a_closed_menu() {
    let (next, action) = MenuState::Closed.apply(MenuEvent::Toggle);
    assert_eq!(next, MenuState::Open);
    assert_eq!(action, None);
}

#[test]
fn toggle_closes_an_open_menu() {
    let (next, action) = MenuState::Open.apply(MenuEvent::Toggle);
    assert_eq!(next, MenuState::Closed);
    assert_eq!(action, None);
}

#[test]
fn toggle_is_its_own_inverse() {
    let (opened, _) = MenuState::Closed.apply(MenuEvent::Toggle);
    let (closed, _) = opened.apply(MenuEvent::Toggle);
    assert_eq!(closed, MenuState::Closed);
}

// =============================================================
// Section selection
// =============================================================

#[test]
fn select_section_scrolls_and_closes_from_open() {
    let (next, action) = MenuState::Open.apply(MenuEvent::SelectSection(SectionId::About));
    assert_eq!(next, MenuState::Closed);
    assert_eq!(action, Some(MenuAction::ScrollTo(SectionId::About)));
}

#[test]
fn select_section_closes_even_when_already_closed() {
    let (next, action) = MenuState::Closed.apply(MenuEvent::SelectSection(SectionId::Review));
    assert_eq!(next, MenuState::Closed);
    assert_eq!(action, Some(MenuAction::ScrollTo(SectionId::Review)));
}

// =============================================================
// Route selection
// =============================================================

#[test]
fn select_route_navigates_and_closes_from_open() {
    let (next, action) = MenuState::Open.apply(MenuEvent::SelectRoute(Route::Contact));
    assert_eq!(next, MenuState::Closed);
    assert_eq!(action, Some(MenuAction::Navigate(Route::Contact)));
}

#[test]
fn select_route_closes_even_when_already_closed() {
    let (next, action) = MenuState::Closed.apply(MenuEvent::SelectRoute(Route::Auth));
    assert_eq!(next, MenuState::Closed);
    assert_eq!(action, Some(MenuAction::Navigate(Route::Auth)));
}

#[test]
fn selection_always_leaves_the_menu_closed() {
    for state in [MenuState::Closed, MenuState::Open] {
        for event in [
            MenuEvent::SelectSection(SectionId::TryModel),
            MenuEvent::SelectRoute(Route::Home),
        ] {
            let (next, _) = state.apply(event);
            assert_eq!(next, MenuState::Closed);
        }
    }
}
