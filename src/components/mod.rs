//! The components module contains the app shell and the sound layer it hosts.

mod app;
pub mod sound_manager;

pub use app::*;
pub use sound_manager::SoundManager;

use std::rc::Rc;

use dioxus::prelude::*;

use sound_manager::SoundController;

/// Context slot for the one controller instance owned by the app shell.
/// Empty until `SoundManager` finishes binding the page's audio elements.
#[derive(Clone, Copy)]
pub struct SoundControllerSignal(pub Signal<Option<Rc<SoundController>>>);

/// Mirror of the controller's muted flag, read by the toggle button label.
#[derive(Clone, Copy)]
pub struct MuteStateSignal(pub Signal<bool>);
