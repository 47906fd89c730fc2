//! `HtmlAudioElement`-backed handles and their binding glue.

use std::rc::Rc;

use futures_util::future;
use futures_util::FutureExt;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlAudioElement};

use crate::diagnostics;

use super::handles::{AudioHandle, PlayFuture, PlayRejection};

/// A browser audio element adapted to the controller's capability surface.
pub struct ElementHandle {
    element: HtmlAudioElement,
}

impl ElementHandle {
    /// Wrap an element and wire its error-notification channel into the log.
    /// Listener closures are handed to the document for the page's lifetime.
    pub fn bind(element: HtmlAudioElement, label: &'static str) -> Rc<Self> {
        let error_element = element.clone();
        let on_error = Closure::wrap(Box::new(move || {
            let detail = media_error_message(&error_element)
                .unwrap_or_else(|| "unknown media error".to_string());
            diagnostics::error(&format!("{label} failed to load: {detail}"));
        }) as Box<dyn FnMut()>);
        let _ = element.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        let on_loaded = Closure::wrap(Box::new(move || {
            diagnostics::debug(&format!("{label} loaded"));
        }) as Box<dyn FnMut()>);
        let _ = element
            .add_event_listener_with_callback("loadeddata", on_loaded.as_ref().unchecked_ref());
        on_loaded.forget();

        Rc::new(Self { element })
    }
}

impl AudioHandle for ElementHandle {
    fn play(&self) -> PlayFuture {
        match self.element.play() {
            Ok(promise) => {
                let request = JsFuture::from(promise);
                async move { request.await.map(|_| ()).map_err(rejection_from_js) }.boxed_local()
            }
            Err(err) => future::ready(Err(rejection_from_js(err))).boxed_local(),
        }
    }

    fn pause(&self) {
        let _ = self.element.pause();
    }

    fn seek(&self, position: f64) {
        self.element.set_current_time(position);
    }

    fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume.clamp(0.0, 1.0));
    }

    fn set_looping(&self, looping: bool) {
        self.element.set_loop(looping);
    }
}

/// Resolve an audio element by id and bind it. The caller decides what
/// absence means.
pub fn audio_handle_by_id(id: &str, label: &'static str) -> Option<Rc<dyn AudioHandle>> {
    let document = window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let audio = element.dyn_into::<HtmlAudioElement>().ok()?;
    Some(ElementHandle::bind(audio, label))
}

fn rejection_from_js(err: JsValue) -> PlayRejection {
    let name = Reflect::get(&err, &"name".into())
        .ok()
        .and_then(|value| value.as_string());
    let message = Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| format!("{err:?}"));

    match name.as_deref() {
        Some("NotAllowedError") => PlayRejection::Blocked(message),
        _ => PlayRejection::Failed(message),
    }
}

/// Decode the element's `MediaError` through `Reflect` rather than the typed
/// binding; the element keeps ownership of the error object.
fn media_error_message(audio: &HtmlAudioElement) -> Option<String> {
    let audio_js = JsValue::from(audio.clone());
    let error_js = Reflect::get(&audio_js, &"error".into()).ok()?;
    if error_js.is_null() || error_js.is_undefined() {
        return None;
    }
    let code = Reflect::get(&error_js, &"code".into())
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u16;

    Some(match code {
        1 => "loading was aborted before any data arrived".to_string(),
        2 => "a network error interrupted the download".to_string(),
        3 => "the audio data could not be decoded".to_string(),
        4 => "no supported source was found".to_string(),
        _ => "the element reported an unrecognized media error".to_string(),
    })
}
