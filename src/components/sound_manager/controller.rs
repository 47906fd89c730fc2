use std::cell::Cell;
use std::rc::Rc;

use crate::diagnostics;

use super::handles::{AudioHandle, PlayFuture, PlayRejection};
use super::levels::SoundLevels;

/// Handles injected by the host UI layer. Any of them may be absent; the
/// controller degrades the affected operation to a logged no-op.
#[derive(Default)]
pub struct SoundHandles {
    pub background: Option<Rc<dyn AudioHandle>>,
    pub like: Option<Rc<dyn AudioHandle>>,
    pub comment: Option<Rc<dyn AudioHandle>>,
}

/// Coordinates the background loop and event chimes against the mute flag and
/// the platform's autoplay policy.
///
/// `background_started` flips to `true` only on an observed successful play
/// resolution and is never cleared afterwards; muting pauses the loop without
/// touching the flag.
pub struct SoundController {
    muted: Cell<bool>,
    background_started: Rc<Cell<bool>>,
    background: Option<Rc<dyn AudioHandle>>,
    like: Option<Rc<dyn AudioHandle>>,
    comment: Option<Rc<dyn AudioHandle>>,
}

impl SoundController {
    pub fn new(handles: SoundHandles) -> Self {
        Self::with_levels(handles, SoundLevels::default())
    }

    pub fn with_levels(handles: SoundHandles, levels: SoundLevels) -> Self {
        let SoundHandles {
            background,
            like,
            comment,
        } = handles;

        if background.is_none() {
            diagnostics::warn("background track not available");
        }
        if like.is_none() {
            diagnostics::warn("like chime not available");
        }
        if comment.is_none() {
            diagnostics::warn("comment chime not available");
        }

        if let Some(background) = &background {
            background.set_volume(levels.background);
            background.set_looping(levels.background_loops);
        }
        if let Some(like) = &like {
            like.set_volume(levels.like);
        }
        if let Some(comment) = &comment {
            comment.set_volume(levels.comment);
        }

        diagnostics::info("sound controller ready");

        Self {
            muted: Cell::new(false),
            background_started: Rc::new(Cell::new(false)),
            background,
            like,
            comment,
        }
    }

    /// Ask the platform to start the background loop. A rejection is an
    /// expected outcome under autoplay policy, so it only downgrades to a
    /// later retry; the started flag is set solely from an observed
    /// successful resolution.
    pub fn attempt_start_background(&self) {
        if self.muted.get() {
            return;
        }
        let Some(background) = &self.background else {
            diagnostics::warn("background track not available");
            return;
        };

        let started = Rc::clone(&self.background_started);
        observe(background.play(), move |outcome| match outcome {
            Ok(()) => started.set(true),
            Err(rejection) => diagnostics::info(&format!(
                "background music deferred until user interaction ({rejection})"
            )),
        });
    }

    /// Autoplay fallback, invoked on the first `pointerdown` or `touchstart`.
    /// Idempotent: a near-simultaneous double fire only produces a second
    /// harmless play request.
    pub fn on_first_interaction(&self) {
        if self.background_started.get() || self.muted.get() {
            return;
        }
        self.attempt_start_background();
    }

    pub fn play_like(&self) {
        self.play_effect(self.like.as_ref(), "like chime");
    }

    pub fn play_comment(&self) {
        self.play_effect(self.comment.as_ref(), "comment chime");
    }

    // Restart-from-zero wins over letting a previous tail ring out.
    fn play_effect(&self, handle: Option<&Rc<dyn AudioHandle>>, label: &'static str) {
        if self.muted.get() {
            return;
        }
        let Some(handle) = handle else {
            diagnostics::warn(&format!("{label} not available"));
            return;
        };

        handle.seek(0.0);
        observe(handle.play(), move |outcome| {
            if let Err(rejection) = outcome {
                diagnostics::info(&format!("{label} did not play ({rejection})"));
            }
        });
    }

    /// Flip the mute flag and return the new value. Unmuting doubles as a
    /// user gesture, so it may start the background loop for the first time.
    pub fn toggle_mute(&self) -> bool {
        let muted = !self.muted.get();
        self.muted.set(muted);

        if muted {
            if let Some(background) = &self.background {
                background.pause();
            }
        } else if self.background_started.get() {
            if let Some(background) = &self.background {
                observe(background.play(), |outcome| {
                    if let Err(rejection) = outcome {
                        diagnostics::info(&format!(
                            "background music did not resume ({rejection})"
                        ));
                    }
                });
            }
        } else {
            self.attempt_start_background();
        }

        muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted.get()
    }

    pub fn background_started(&self) -> bool {
        self.background_started.get()
    }
}

/// Watch a play outcome without blocking the caller. Browser builds hand the
/// future to the event loop; headless builds only see outcomes that are
/// already settled and drop the rest.
#[cfg(target_arch = "wasm32")]
fn observe(request: PlayFuture, on_outcome: impl FnOnce(Result<(), PlayRejection>) + 'static) {
    wasm_bindgen_futures::spawn_local(async move { on_outcome(request.await) });
}

#[cfg(not(target_arch = "wasm32"))]
fn observe(request: PlayFuture, on_outcome: impl FnOnce(Result<(), PlayRejection>) + 'static) {
    use futures_util::FutureExt;

    if let Some(outcome) = request.now_or_never() {
        on_outcome(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{capture, Level};
    use futures_util::future;
    use futures_util::FutureExt;
    use std::cell::RefCell;

    #[derive(Clone, Copy)]
    enum Script {
        Resolve,
        Block,
        Fail,
        Never,
    }

    struct FakeHandle {
        script: Cell<Script>,
        plays: Cell<usize>,
        pauses: Cell<usize>,
        seeks: RefCell<Vec<f64>>,
        volume: Cell<Option<f64>>,
        looping: Cell<Option<bool>>,
    }

    impl FakeHandle {
        fn new(script: Script) -> Rc<Self> {
            Rc::new(Self {
                script: Cell::new(script),
                plays: Cell::new(0),
                pauses: Cell::new(0),
                seeks: RefCell::new(Vec::new()),
                volume: Cell::new(None),
                looping: Cell::new(None),
            })
        }
    }

    impl AudioHandle for FakeHandle {
        fn play(&self) -> PlayFuture {
            self.plays.set(self.plays.get() + 1);
            match self.script.get() {
                Script::Resolve => future::ready(Ok(())).boxed_local(),
                Script::Block => {
                    future::ready(Err(PlayRejection::Blocked("user gesture required".into())))
                        .boxed_local()
                }
                Script::Fail => {
                    future::ready(Err(PlayRejection::Failed("decode error".into()))).boxed_local()
                }
                Script::Never => future::pending().boxed_local(),
            }
        }

        fn pause(&self) {
            self.pauses.set(self.pauses.get() + 1);
        }

        fn seek(&self, position: f64) {
            self.seeks.borrow_mut().push(position);
        }

        fn set_volume(&self, volume: f64) {
            self.volume.set(Some(volume));
        }

        fn set_looping(&self, looping: bool) {
            self.looping.set(Some(looping));
        }
    }

    fn full_controller(
        script: Script,
    ) -> (SoundController, Rc<FakeHandle>, Rc<FakeHandle>, Rc<FakeHandle>) {
        let background = FakeHandle::new(script);
        let like = FakeHandle::new(Script::Resolve);
        let comment = FakeHandle::new(Script::Resolve);
        let controller = SoundController::new(SoundHandles {
            background: Some(background.clone()),
            like: Some(like.clone()),
            comment: Some(comment.clone()),
        });
        capture::take();
        (controller, background, like, comment)
    }

    fn warnings(records: Vec<(Level, String)>) -> Vec<String> {
        records
            .into_iter()
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message)
            .collect()
    }

    #[test]
    fn toggle_parity_tracks_odd_call_counts() {
        let (controller, _background, _like, _comment) = full_controller(Script::Resolve);
        for n in 1..=5 {
            let muted = controller.toggle_mute();
            assert_eq!(muted, n % 2 == 1);
            assert_eq!(controller.is_muted(), muted);
        }
    }

    #[test]
    fn muted_effects_never_reach_the_handle() {
        let (controller, _background, like, comment) = full_controller(Script::Resolve);
        controller.toggle_mute();
        controller.play_like();
        controller.play_comment();
        assert_eq!(like.plays.get(), 0);
        assert_eq!(comment.plays.get(), 0);
    }

    #[test]
    fn absent_effect_handle_warns_once_without_panicking() {
        let controller = SoundController::new(SoundHandles::default());
        capture::take();

        controller.play_like();

        let warned = warnings(capture::take());
        assert_eq!(warned.len(), 1);
        assert!(warned[0].contains("like chime"));
    }

    #[test]
    fn background_started_survives_mute_cycles() {
        let (controller, _background, _like, _comment) = full_controller(Script::Resolve);
        controller.attempt_start_background();
        assert!(controller.background_started());

        controller.toggle_mute();
        controller.toggle_mute();
        controller.toggle_mute();
        assert!(controller.background_started());
    }

    #[test]
    fn unmuting_before_start_attempts_background_once() {
        let (controller, background, _like, _comment) = full_controller(Script::Never);
        controller.toggle_mute();
        assert_eq!(background.plays.get(), 0);

        controller.toggle_mute();
        assert_eq!(background.plays.get(), 1);
    }

    #[test]
    fn muting_pauses_background_and_reports_new_state() {
        let (controller, background, _like, _comment) = full_controller(Script::Resolve);
        let muted = controller.toggle_mute();
        assert!(muted);
        assert!(controller.is_muted());
        assert_eq!(background.pauses.get(), 1);
    }

    #[test]
    fn first_interaction_starts_background_on_success() {
        let (controller, background, _like, _comment) = full_controller(Script::Resolve);
        assert!(!controller.background_started());

        controller.on_first_interaction();
        assert_eq!(background.plays.get(), 1);
        assert!(controller.background_started());

        // The sibling listener firing right after is a no-op.
        controller.on_first_interaction();
        assert_eq!(background.plays.get(), 1);
    }

    #[test]
    fn rapid_effect_retrigger_rewinds_each_time() {
        let (controller, _background, like, _comment) = full_controller(Script::Resolve);
        controller.play_like();
        controller.play_like();
        assert_eq!(like.plays.get(), 2);
        assert_eq!(*like.seeks.borrow(), vec![0.0, 0.0]);
    }

    #[test]
    fn absent_background_warns_and_leaves_started_false() {
        let controller = SoundController::new(SoundHandles::default());
        capture::take();

        controller.attempt_start_background();

        assert!(!controller.background_started());
        let warned = warnings(capture::take());
        assert_eq!(warned.len(), 1);
        assert!(warned[0].contains("background track"));
    }

    #[test]
    fn construction_applies_fixed_levels() {
        let (_controller, background, like, comment) = full_controller(Script::Resolve);
        assert_eq!(background.volume.get(), Some(0.08));
        assert_eq!(background.looping.get(), Some(true));
        assert_eq!(like.volume.get(), Some(0.2));
        assert_eq!(comment.volume.get(), Some(0.2));
    }

    #[test]
    fn custom_levels_flow_through_to_handles() {
        let background = FakeHandle::new(Script::Resolve);
        let levels = SoundLevels {
            background: 0.5,
            like: 0.9,
            comment: 0.9,
            background_loops: false,
        };
        let _controller = SoundController::with_levels(
            SoundHandles {
                background: Some(background.clone()),
                like: None,
                comment: None,
            },
            levels,
        );
        assert_eq!(background.volume.get(), Some(0.5));
        assert_eq!(background.looping.get(), Some(false));
    }

    #[test]
    fn muted_start_attempt_is_silent() {
        let (controller, background, _like, _comment) = full_controller(Script::Resolve);
        controller.toggle_mute();
        capture::take();

        controller.attempt_start_background();

        assert_eq!(background.plays.get(), 0);
        assert!(warnings(capture::take()).is_empty());
    }

    #[test]
    fn pending_resolution_leaves_flag_clear_but_controller_usable() {
        let (controller, background, like, _comment) = full_controller(Script::Never);
        controller.attempt_start_background();
        assert_eq!(background.plays.get(), 1);
        assert!(!controller.background_started());

        controller.play_like();
        assert_eq!(like.plays.get(), 1);

        let muted = controller.toggle_mute();
        assert!(muted);
        assert_eq!(background.pauses.get(), 1);
    }

    #[test]
    fn blocked_attempt_retries_on_interaction() {
        let (controller, background, _like, _comment) = full_controller(Script::Block);
        controller.attempt_start_background();
        assert!(!controller.background_started());

        background.script.set(Script::Resolve);
        controller.on_first_interaction();
        assert_eq!(background.plays.get(), 2);
        assert!(controller.background_started());
    }

    #[test]
    fn failed_effect_play_is_logged_not_raised() {
        let background = FakeHandle::new(Script::Resolve);
        let like = FakeHandle::new(Script::Fail);
        let controller = SoundController::new(SoundHandles {
            background: Some(background),
            like: Some(like.clone()),
            comment: None,
        });
        capture::take();

        controller.play_like();
        controller.play_like();

        // Both calls go through; the failure never disables the handle.
        assert_eq!(like.plays.get(), 2);
        assert!(warnings(capture::take()).is_empty());
    }
}
