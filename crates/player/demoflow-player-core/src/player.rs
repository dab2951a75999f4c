//! StepPlayer: deterministic, resumable traversal of a fixed step sequence.
//!
//! The player advances either by clock ticks (autoplay) or by direct user
//! navigation. All operations are synchronous and total: out-of-range or
//! out-of-order requests are absorbed as no-ops so the UI never crashes
//! from double-clicks or stale handlers.

use std::sync::Arc;

use log::{debug, trace};

use crate::clock::{ClockHandle, PlaybackClock};
use crate::config::{Config, NavigationPolicy};
use crate::error::ScriptError;
use crate::inputs::{Inputs, PlayerCommand};
use crate::outputs::{Outputs, PlayerEvent, PlayerSnapshot};
use crate::script::{DemoScript, StepDefinition};
use crate::status::PlaybackStatus;

/// One screen's demo player. Owns its clock and its position in the
/// script; nothing is shared between player instances.
#[derive(Debug)]
pub struct StepPlayer {
    script: Arc<DemoScript>,
    cfg: Config,
    clock: PlaybackClock,
    /// Handle issued to the active tick source while playing.
    active: Option<ClockHandle>,
    current_index: usize,
    elapsed_ms: u32,
    status: PlaybackStatus,
    /// Highest index playback has entered; gates `VisitedOnly` navigation.
    furthest_visited: usize,
    outputs: Outputs,
}

impl StepPlayer {
    /// Build a player over a script, rejecting scripts that violate basic
    /// invariants (empty sequence, zero durations).
    pub fn new(script: Arc<DemoScript>, cfg: Config) -> Result<Self, ScriptError> {
        script.validate_basic()?;
        Ok(Self {
            script,
            clock: PlaybackClock::new(cfg.tick_interval_ms),
            cfg,
            active: None,
            current_index: 0,
            elapsed_ms: 0,
            status: PlaybackStatus::Idle,
            furthest_visited: 0,
            outputs: Outputs::default(),
        })
    }

    /// Start or resume autoplay. From `Completed` this is a restart.
    /// No-op while already playing.
    pub fn play(&mut self) {
        match self.status {
            PlaybackStatus::Playing => {
                debug!("play ignored: already playing");
                return;
            }
            PlaybackStatus::Completed => {
                self.enter_step(0);
                self.furthest_visited = 0;
            }
            PlaybackStatus::Idle | PlaybackStatus::Paused => {}
        }
        let resumed = self.status == PlaybackStatus::Paused;
        self.active = Some(self.clock.start());
        self.status = PlaybackStatus::Playing;
        self.emit(PlayerEvent::PlaybackStarted { resumed });
    }

    /// Stop the clock, preserving elapsed progress within the current step.
    /// Only meaningful while playing; idempotent otherwise.
    pub fn pause(&mut self) {
        if !self.status.can_pause() {
            debug!("pause ignored in status '{}'", self.status.name());
            return;
        }
        self.stop_clock();
        self.status = PlaybackStatus::Paused;
        self.emit(PlayerEvent::PlaybackPaused);
    }

    /// Return to the initial state. Allowed from any status.
    pub fn reset(&mut self) {
        self.stop_clock();
        self.current_index = 0;
        self.elapsed_ms = 0;
        self.furthest_visited = 0;
        self.status = PlaybackStatus::Idle;
        self.emit(PlayerEvent::PlaybackReset);
    }

    /// Jump directly to a step. Manual navigation always pauses autoplay;
    /// selecting a step is a deliberate override of the script. Out-of-range
    /// indices, and unvisited indices under `VisitedOnly`, are ignored.
    pub fn go_to_step(&mut self, index: usize) {
        if index >= self.script.len() {
            debug!("go_to_step ignored: index {index} out of range");
            return;
        }
        if self.cfg.navigation == NavigationPolicy::VisitedOnly && index > self.furthest_visited {
            debug!("go_to_step ignored: step {index} not yet visited");
            return;
        }
        self.stop_clock();
        self.enter_step(index);
        self.status = PlaybackStatus::Paused;
    }

    /// Advance one step manually. No-op at the final step.
    pub fn next(&mut self) {
        if self.current_index >= self.script.last_index() {
            debug!("next ignored at final step");
            return;
        }
        self.stop_clock();
        let target = self.current_index + 1;
        self.enter_step(target);
        self.status = PlaybackStatus::Paused;
    }

    /// Go back one step manually. No-op at step 0.
    pub fn previous(&mut self) {
        if self.current_index == 0 {
            debug!("previous ignored at step 0");
            return;
        }
        self.stop_clock();
        let target = self.current_index - 1;
        self.enter_step(target);
        self.status = PlaybackStatus::Paused;
    }

    /// Deliver a clock tick of `delta_ms`. Inert unless the player is
    /// playing with an armed clock, so ticks racing a pause/reset in the
    /// same logical turn cannot mutate state.
    pub fn tick(&mut self, delta_ms: u32) {
        let Some(handle) = self.active else {
            return;
        };
        if !self.clock.accepts(handle) || !self.status.is_playing() {
            return;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        let duration_ms = self.current_step().duration_ms;
        if self.elapsed_ms < duration_ms {
            return;
        }

        if self.current_index == self.script.last_index() {
            self.elapsed_ms = duration_ms;
            self.stop_clock();
            self.status = PlaybackStatus::Completed;
            self.emit(PlayerEvent::PlaybackCompleted);
        } else {
            let target = self.current_index + 1;
            self.enter_step(target);
        }
    }

    /// Apply one command. Adapters batch these through [`Inputs`].
    pub fn apply(&mut self, cmd: PlayerCommand) {
        match cmd {
            PlayerCommand::Play => self.play(),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Reset => self.reset(),
            PlayerCommand::GoToStep { index } => self.go_to_step(index),
            PlayerCommand::Next => self.next(),
            PlayerCommand::Previous => self.previous(),
        }
    }

    /// Step the player: apply commands, then advance time. Events buffered
    /// since the previous update are cleared first.
    pub fn update(&mut self, delta_ms: u32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        for cmd in inputs.commands {
            self.apply(cmd);
        }
        if delta_ms > 0 {
            self.tick(delta_ms);
        }
        &self.outputs
    }

    /// Read-only state for rendering.
    pub fn snapshot(&self) -> PlayerSnapshot {
        let step_count = self.script.len();
        let duration_ms = self.current_step().duration_ms;
        PlayerSnapshot {
            current_index: self.current_index,
            elapsed_ms: self.elapsed_ms,
            status: self.status,
            step_count,
            sequence_progress: self.current_index as f32 / step_count as f32 * 100.0,
            step_progress: self.elapsed_ms as f32 / duration_ms as f32 * 100.0,
        }
    }

    /// Drain events buffered by direct method calls, for hosts that do not
    /// go through `update()`.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.outputs.events)
    }

    #[inline]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    #[inline]
    pub fn current_step(&self) -> &StepDefinition {
        // In range by construction: index is only ever set through
        // enter_step/reset, both bounded by the validated script.
        &self.script.steps[self.current_index]
    }

    #[inline]
    pub fn script(&self) -> &Arc<DemoScript> {
        &self.script
    }

    /// Nominal tick period the host should schedule at.
    #[inline]
    pub fn tick_interval_ms(&self) -> u32 {
        self.clock.interval_ms()
    }

    fn enter_step(&mut self, index: usize) {
        trace!("entering step {index} '{}'", self.script.steps[index].title);
        self.current_index = index;
        self.elapsed_ms = 0;
        if index > self.furthest_visited {
            self.furthest_visited = index;
        }
        self.emit(PlayerEvent::StepEntered { index });
    }

    fn stop_clock(&mut self) {
        self.clock.stop();
        self.active = None;
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.outputs.push_event(event, self.cfg.max_events_per_tick);
    }
}
