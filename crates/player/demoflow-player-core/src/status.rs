use serde::{Deserialize, Serialize};

/// Playback status of a step player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Freshly constructed or reset; nothing has played yet.
    Idle,
    /// The clock is armed and ticks advance the script.
    Playing,
    /// Stopped mid-script; elapsed progress within the step is preserved.
    Paused,
    /// The final step's duration has been exhausted.
    Completed,
}

impl PlaybackStatus {
    /// Get the name of this status.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    /// Check if the player is actively playing.
    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Check if `play()` would start or resume playback.
    #[inline]
    pub fn can_resume(&self) -> bool {
        matches!(self, Self::Idle | Self::Paused | Self::Completed)
    }

    /// Check if the player can be paused.
    #[inline]
    pub fn can_pause(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self::Idle
    }
}
