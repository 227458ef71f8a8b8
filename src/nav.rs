//! In-page navigation helpers for the section anchors.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls to the section with the given element id. Missing sections
/// are ignored so stale anchors never panic the UI.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Smooth-scrolls back to the top of the page (the "Overview" anchor).
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
