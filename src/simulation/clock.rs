//! Fixed-rate tick scheduler
//!
//! [`SimulationClock`] is a two-state machine (Idle / Running). While Running
//! it owns a [`TickHandle`] that accumulates host frame time and hands out
//! whole ticks of `interval` length. The host drives it from its own frame
//! loop; the clock never spawns threads or timers.

use std::time::Duration;

use bevy::log::debug;

/// Live schedule of a running clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickHandle {
    accumulated: Duration, // time not yet spent on whole ticks
    ticks: u64, // ticks handed out since start
}

impl TickHandle {
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Idle,
    Running(TickHandle),
}

#[derive(Debug, Clone)]
pub struct SimulationClock {
    interval: Duration,
    max_catch_up: u32,
    state: ClockState,
}

impl SimulationClock {
    /// `max_catch_up` bounds how many overdue ticks one `advance` call
    /// releases; anything beyond is dropped
    pub fn new(interval: Duration, max_catch_up: u32) -> Self {
        Self {
            interval,
            max_catch_up: max_catch_up.max(1),
            state: ClockState::Idle,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running(_))
    }

    /// Ticks run since the last start, `None` while idle
    pub fn ticks(&self) -> Option<u64> {
        match self.state {
            ClockState::Running(handle) => Some(handle.ticks()),
            ClockState::Idle => None,
        }
    }

    /// Idle -> Running. Returns false if already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = ClockState::Running(TickHandle::default());
        true
    }

    /// Running -> Idle, dropping the handle. Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = ClockState::Idle;
        true
    }

    /// Feed `elapsed` host time and return how many ticks are due now
    /// Always zero while idle
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let interval = self.interval;
        let max_catch_up = self.max_catch_up;
        let ClockState::Running(handle) = &mut self.state else {
            return 0;
        };
        if interval.is_zero() {
            return 0;
        }

        handle.accumulated += elapsed;
        let mut due = 0;
        while handle.accumulated >= interval && due < max_catch_up {
            handle.accumulated -= interval;
            due += 1;
        }

        // Behind by more than the catch-up budget: skip the backlog
        if handle.accumulated >= interval {
            let dropped = handle.accumulated.as_nanos() / interval.as_nanos();
            debug!("clock behind, dropping {} ticks", dropped);
            handle.accumulated = Duration::from_nanos(
                (handle.accumulated.as_nanos() % interval.as_nanos()) as u64,
            );
        }

        handle.ticks += u64::from(due);
        due
    }
}
