//! Demoflow Step Player Core (host-agnostic)
//!
//! The scripted, resumable step player behind Demoflow's guided product
//! demos. This crate defines the script data model, the playback clock
//! gate, the player state machine, inputs/outputs contracts, and a loader
//! for the stored demo-script JSON format. It performs no I/O and owns no
//! real timer; hosts drive time through `StepPlayer::update`/`tick`.

pub mod clock;
pub mod config;
pub mod error;
pub mod inputs;
pub mod outputs;
pub mod player;
pub mod script;
pub mod status;
pub mod stored_script;

// Re-exports for consumers (adapters)
pub use clock::{ClockHandle, PlaybackClock};
pub use config::{Config, NavigationPolicy};
pub use error::ScriptError;
pub use inputs::{Inputs, PlayerCommand};
pub use outputs::{Outputs, PlayerEvent, PlayerSnapshot};
pub use player::StepPlayer;
pub use script::{DemoScript, StepDefinition};
pub use status::PlaybackStatus;
pub use stored_script::parse_stored_script_json;
