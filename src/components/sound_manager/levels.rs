use serde::{Deserialize, Serialize};

/// Fixed playback levels. The background loop sits well under the chimes so
/// it stays ambient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoundLevels {
    pub background: f64,
    pub like: f64,
    pub comment: f64,
    pub background_loops: bool,
}

impl Default for SoundLevels {
    fn default() -> Self {
        Self {
            background: 0.08,
            like: 0.2,
            comment: 0.2,
            background_loops: true,
        }
    }
}
