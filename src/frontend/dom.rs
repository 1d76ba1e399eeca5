use crate::navbar::anchor_target_id;
use wasm_bindgen::JsValue;
use web_sys::{window, Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Smoothly scrolls to the element an in-page link points at and records the
/// hash in history. Returns `false` when the target does not exist.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target_id(href) else {
        return false;
    };
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
    }

    true
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
