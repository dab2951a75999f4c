//! Input contracts for the step player.
//!
//! Direct methods on [`StepPlayer`](crate::StepPlayer) are the primary
//! in-process API; commands exist so adapters (web) can batch and
//! serialize UI intents and pass them into `update()` each tick.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Commands applied, in order, before time advances.
    #[serde(default)]
    pub commands: Vec<PlayerCommand>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Reset,
    GoToStep { index: usize },
    Next,
    Previous,
}
