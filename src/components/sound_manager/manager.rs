use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::components::SoundControllerSignal;
#[cfg(target_arch = "wasm32")]
use crate::diagnostics;

#[cfg(target_arch = "wasm32")]
use super::autoplay::register_first_interaction;
#[cfg(target_arch = "wasm32")]
use super::controller::{SoundController, SoundHandles};
#[cfg(target_arch = "wasm32")]
use super::shortcuts::register_mute_shortcut;
#[cfg(target_arch = "wasm32")]
use super::web_audio::audio_handle_by_id;

/// Binds the page's audio elements and owns construction of the one
/// controller instance. Renders nothing.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn SoundManager() -> Element {
    let mut controller_slot = use_context::<SoundControllerSignal>().0;

    use_effect(move || {
        if controller_slot.peek().is_some() {
            return;
        }

        spawn(async move {
            // Give the freshly mounted elements one tick to settle.
            gloo_timers::future::TimeoutFuture::new(0).await;

            if controller_slot.peek().is_some() {
                return;
            }

            let handles = SoundHandles {
                background: audio_handle_by_id("bg-music", "background track"),
                like: audio_handle_by_id("like-sound", "like chime"),
                comment: audio_handle_by_id("comment-sound", "comment chime"),
            };

            let controller = Rc::new(SoundController::new(handles));
            controller.attempt_start_background();

            let fallback = Rc::clone(&controller);
            register_first_interaction(move || fallback.on_first_interaction());
            register_mute_shortcut();

            controller_slot.set(Some(controller));
            diagnostics::info("sound manager initialized");
        });
    });

    rsx! {}
}

/// Native builds have no page audio to bind.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn SoundManager() -> Element {
    rsx! {}
}
