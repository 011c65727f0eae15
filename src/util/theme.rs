//! Dark theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the `dark`
//! class to the `<html>` element. The app defaults to dark when no
//! preference is stored. Requires a browser environment.

const STORAGE_KEY: &str = "autoeda-theme";

/// Read the theme preference from localStorage.
///
/// Returns `true` (dark) when the stored value says so or when nothing is
/// stored — dark is the default theme.
pub fn read_preference() -> bool {
    let Some(window) = web_sys::window() else {
        return true;
    };

    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
            return val == "dark";
        }
    }

    true
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(dark: bool) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = el.class_list();
        if dark {
            let _ = class_list.add_1("dark");
        } else {
            let _ = class_list.remove_1("dark");
        }
    }
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
        }
    }
    next
}
