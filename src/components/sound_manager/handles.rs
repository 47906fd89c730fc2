use std::fmt;

use futures_util::future::LocalBoxFuture;

/// Asynchronous outcome of a play request. Observed and deliberately
/// discarded after logging; never awaited synchronously.
pub type PlayFuture = LocalBoxFuture<'static, Result<(), PlayRejection>>;

/// Why the platform declined to start playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayRejection {
    /// Gesture-gated refusal. Expected on fresh page loads under autoplay
    /// policy.
    Blocked(String),
    /// Anything else: decode failure, missing source, aborted load.
    Failed(String),
}

impl fmt::Display for PlayRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayRejection::Blocked(reason) => write!(f, "autoplay blocked: {reason}"),
            PlayRejection::Failed(reason) => write!(f, "playback failed: {reason}"),
        }
    }
}

/// Capability surface of a playable resource owned by the host page.
///
/// The controller never owns the underlying element; it issues commands and
/// observes play outcomes, nothing more.
pub trait AudioHandle {
    fn play(&self) -> PlayFuture;
    fn pause(&self);
    fn seek(&self, position: f64);
    fn set_volume(&self, volume: f64);
    fn set_looping(&self, looping: bool);
}
