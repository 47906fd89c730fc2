use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::sound_manager::{
    play_comment_sound, play_like_sound, toggle_sound, SoundController, SoundManager,
};
use crate::components::{MuteStateSignal, SoundControllerSignal};

/// Top-level shell: owns the audio elements, the controller slot, and the
/// visible trigger controls. The globe visualization mounts inside
/// `globe-stage`; sound never blocks it.
#[component]
pub fn AppShell() -> Element {
    let controller =
        use_context_provider(|| SoundControllerSignal(Signal::new(None::<Rc<SoundController>>)));
    let mute_state = use_context_provider(|| MuteStateSignal(Signal::new(false)));
    let muted = mute_state.0;

    rsx! {
        audio { id: "bg-music", src: "/assets/bg-music.mp3", preload: "auto" }
        audio { id: "like-sound", src: "/assets/like.mp3", preload: "auto" }
        audio { id: "comment-sound", src: "/assets/comment.mp3", preload: "auto" }

        SoundManager {}

        main { class: "globe-shell",
            h1 { "Globechime" }
            div { id: "globe-stage" }

            div { class: "actions",
                button {
                    id: "like-btn",
                    onclick: move |_| play_like_sound(controller),
                    "👍 Like"
                }
                button {
                    id: "comment-btn",
                    onclick: move |_| play_comment_sound(controller),
                    "💬 Comment"
                }
                button {
                    id: "sound-toggle-btn",
                    onclick: move |_| {
                        toggle_sound(controller, mute_state);
                    },
                    if muted() { "🔇 Muted" } else { "🔊 Sound On" }
                }
            }
        }
    }
}
