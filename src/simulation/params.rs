//! Tunables of the toy, with the stock values as named constants
//!
//! Force model: `G`, `max_force`, `softening`. Spawning: `min_radius`,
//! `growth`. Pacing: `tick`, `max_catch_up`.

use std::time::Duration;

pub const DEFAULT_G: f64 = 10.0;
pub const DEFAULT_MAX_FORCE: f64 = 5.0;
pub const DEFAULT_SOFTENING: f64 = 0.1;
pub const DEFAULT_MIN_RADIUS: f64 = 5.0;
pub const DEFAULT_GROWTH: f64 = 1.0;
pub const DEFAULT_TICK_MS: u64 = 16;
pub const DEFAULT_MAX_CATCH_UP: u32 = 4;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub max_force: f64, // hard cap on pairwise force magnitude
    pub softening: f64, // added to distance, not squared
    pub min_radius: f64, // radius of a freshly spawned body
    pub growth: f64, // radius added per tick while staged
    pub tick: Duration, // fixed tick interval
    pub max_catch_up: u32, // max ticks run per host frame
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: DEFAULT_G,
            max_force: DEFAULT_MAX_FORCE,
            softening: DEFAULT_SOFTENING,
            min_radius: DEFAULT_MIN_RADIUS,
            growth: DEFAULT_GROWTH,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }
}
