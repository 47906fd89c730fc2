//! One-shot first-interaction listeners used to satisfy autoplay policy.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions};

use crate::diagnostics;

/// Register `callback` for the first `pointerdown` or `touchstart` on the
/// document. Each listener fires at most once; touch devices that also report
/// pointer events may invoke the callback twice in quick succession, so
/// callers must tolerate a double fire.
pub fn register_first_interaction<F>(callback: F)
where
    F: Fn() + Clone + 'static,
{
    let Some(document) = window().and_then(|w| w.document()) else {
        diagnostics::warn("document unavailable; autoplay fallback not registered");
        return;
    };

    for event in ["pointerdown", "touchstart"] {
        let callback = callback.clone();
        let listener = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            listener.as_ref().unchecked_ref(),
            &options,
        );
        listener.forget();
    }
}
