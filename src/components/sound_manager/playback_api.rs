//! Entry points the rest of the UI calls to trigger sounds.
//!
//! Each guards on the controller slot, so a click that races initialization
//! degrades to an error log instead of a crash.

use std::rc::Rc;

use dioxus::prelude::WritableExt;

use crate::components::{MuteStateSignal, SoundControllerSignal};
use crate::diagnostics;

use super::controller::SoundController;

fn with_controller<T>(
    controller: SoundControllerSignal,
    fallback: T,
    operation: impl FnOnce(&Rc<SoundController>) -> T,
) -> T {
    let slot = controller.0;
    match slot() {
        Some(controller) => operation(&controller),
        None => {
            diagnostics::error("sound controller not initialized yet");
            fallback
        }
    }
}

/// Trigger the like chime.
pub fn play_like_sound(controller: SoundControllerSignal) {
    with_controller(controller, (), |controller| controller.play_like());
}

/// Trigger the comment chime.
pub fn play_comment_sound(controller: SoundControllerSignal) {
    with_controller(controller, (), |controller| controller.play_comment());
}

/// Re-attempt starting the background loop; the page may call this from its
/// own ready hooks.
#[allow(dead_code)]
pub fn initialize_background_music(controller: SoundControllerSignal) {
    with_controller(controller, (), |controller| {
        controller.attempt_start_background()
    });
}

/// Flip mute, mirror the new state into the UI signal, and return it.
/// Reports `false` while the controller is still absent.
pub fn toggle_sound(controller: SoundControllerSignal, mute_state: MuteStateSignal) -> bool {
    let mut mirror = mute_state.0;
    with_controller(controller, false, |controller| {
        let muted = controller.toggle_mute();
        mirror.set(muted);
        muted
    })
}
