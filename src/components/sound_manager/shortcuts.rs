//! Global keyboard shortcut: `m` toggles mute.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent};

/// Route `m` through the on-screen toggle button so mute state updates stay
/// in the one UI handler.
pub fn register_mute_shortcut() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if !is_mute_shortcut(&event) {
            return;
        }
        event.prevent_default();
        click_by_id("sound-toggle-btn");
    }) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
    listener.forget();
}

fn is_mute_shortcut(event: &KeyboardEvent) -> bool {
    if event.default_prevented()
        || event.is_composing()
        || event.meta_key()
        || event.ctrl_key()
        || event.alt_key()
        || is_editable_target(event)
    {
        return false;
    }
    event.key().eq_ignore_ascii_case("m")
}

fn is_editable_target(event: &KeyboardEvent) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element.has_attribute("contenteditable")
            && element
                .get_attribute("contenteditable")
                .map(|v| v.to_ascii_lowercase() != "false")
                .unwrap_or(true)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

fn click_by_id(id: &str) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(element) = doc.get_element_by_id(id) {
            if let Ok(html) = element.dyn_into::<HtmlElement>() {
                html.click();
            }
        }
    }
}
