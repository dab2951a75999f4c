//! Playback clock: the gate between a host tick source and the player.
//!
//! The core never owns a real timer. Hosts (a JS interval, a UI frame
//! loop, a test) call into the player at whatever cadence they schedule,
//! and the clock decides whether each tick is delivered. `start` hands out
//! a [`ClockHandle`] stamped with the clock's current epoch; `stop` bumps
//! the epoch, so every handle issued before the stop goes stale. A tick
//! arriving through a stale handle is dropped, which closes the ghost-timer
//! race: stopping the clock is synchronous with the state transition that
//! logically stops playback, and no callback scheduled earlier can mutate
//! state afterwards.

use log::debug;

/// Proof that a tick source was armed; checked against the clock's epoch
/// on every delivery. Not serializable: a handle is only meaningful within
/// the process that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockHandle(u64);

#[derive(Debug)]
pub struct PlaybackClock {
    interval_ms: u32,
    epoch: u64,
    running: bool,
}

impl PlaybackClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            epoch: 0,
            running: false,
        }
    }

    /// Arm the clock and return the handle ticks must present.
    ///
    /// Idempotent: starting a running clock returns a handle for the
    /// current epoch instead of restarting, so an existing tick source
    /// never double-emits.
    pub fn start(&mut self) -> ClockHandle {
        if self.running {
            debug!("clock start ignored: already running (epoch {})", self.epoch);
        } else {
            self.running = true;
        }
        ClockHandle(self.epoch)
    }

    /// Disarm the clock, invalidating every outstanding handle.
    /// Safe to call when not running (no-op).
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.epoch = self.epoch.wrapping_add(1);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a tick presenting `handle` should be delivered.
    #[inline]
    pub fn accepts(&self, handle: ClockHandle) -> bool {
        self.running && handle.0 == self.epoch
    }

    /// Nominal tick period hosts should schedule at, in milliseconds.
    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
