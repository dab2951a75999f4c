//! Core configuration for demoflow-player-core.

use serde::{Deserialize, Serialize};

/// Configuration for player timing and navigation behavior.
/// Keep this minimal; expand as needed without breaking API.
/// Partial JSON configs are filled from the defaults.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nominal clock period in milliseconds. Hosts schedule their tick
    /// source at this rate; the core only uses it to hand the value back.
    pub tick_interval_ms: u32,

    /// Maximum events retained per update before excess events are dropped.
    pub max_events_per_tick: usize,

    /// Which manual jumps `go_to_step` accepts.
    pub navigation: NavigationPolicy,
}

/// Policy for direct step selection from the step list.
///
/// `next`/`previous`/`reset` are never gated; only `go_to_step` is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationPolicy {
    /// Any in-range index may be selected (the business-demo step list).
    #[default]
    Unrestricted,
    /// Only steps playback has already reached may be selected (the gated
    /// stepper used by the identity-verification flow).
    VisitedOnly,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            max_events_per_tick: 64,
            navigation: NavigationPolicy::Unrestricted,
        }
    }
}
