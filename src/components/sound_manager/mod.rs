//! Sound manager: a looping background track plus one-shot chimes for like
//! and comment events, with a mute toggle and autoplay-policy handling.
//!
//! The controller itself is platform-free and fully testable; browser element
//! binding, the first-interaction fallback, and the keyboard shortcut live in
//! wasm-only modules.

mod controller;
mod handles;
mod levels;
mod manager;
mod playback_api;

#[cfg(target_arch = "wasm32")]
mod autoplay;
#[cfg(target_arch = "wasm32")]
mod shortcuts;
#[cfg(target_arch = "wasm32")]
mod web_audio;

pub use controller::{SoundController, SoundHandles};
pub use handles::{AudioHandle, PlayFuture, PlayRejection};
pub use levels::SoundLevels;
pub use manager::SoundManager;
pub use playback_api::{
    initialize_background_music, play_comment_sound, play_like_sound, toggle_sound,
};
