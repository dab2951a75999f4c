//! Output contracts from the step player.
//!
//! A screen renders from [`PlayerSnapshot`] after every mutation and uses
//! [`PlayerEvent`]s for one-shot side effects (scrolling the active step
//! into view, a completion flourish). Events are buffered per update and
//! cleared at the start of the next one.

use serde::{Deserialize, Serialize};

use crate::status::PlaybackStatus;

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerEvent {
    PlaybackStarted {
        /// True when resuming from pause, false for a cold or restarted run.
        resumed: bool,
    },
    PlaybackPaused,
    PlaybackReset,
    PlaybackCompleted,
    /// The player landed on a step, whether by autoplay or manual
    /// navigation.
    StepEntered {
        index: usize,
    },
}

/// Read-only state a screen renders from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerSnapshot {
    pub current_index: usize,
    pub elapsed_ms: u32,
    pub status: PlaybackStatus,
    pub step_count: usize,
    /// Position in the sequence as a percentage of the step count.
    pub sequence_progress: f32,
    /// Elapsed share of the current step's duration, 0..=100.
    pub step_progress: f32,
}

/// Outputs returned by `StepPlayer::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<PlayerEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Push an event, dropping it once the per-update cap is reached.
    #[inline]
    pub fn push_event(&mut self, event: PlayerEvent, cap: usize) {
        if self.events.len() < cap {
            self.events.push(event);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
