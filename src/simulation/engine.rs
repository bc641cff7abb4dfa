//! Runtime engine: the staged body, the gravity field and the clock
//!
//! [`Simulation`] is the single owner of all simulation state. Hosts feed it
//! normalized input and frame time and give it a [`Surface`] to paint on.
//! Every call runs to completion before returning, so ticks and input never
//! interleave mid-update.
//!
//! It is inserted into Bevy as a `Resource` by the viewer.

use std::time::Duration;

use bevy::log::{debug, info};
use bevy::prelude::Resource;

use crate::configuration::config::GravitronConfig;
use crate::simulation::clock::SimulationClock;
use crate::simulation::forces::{GravityField, NewtonianGravity};
use crate::simulation::input::{InputEvent, InputKind};
use crate::simulation::params::Parameters;
use crate::simulation::spawn::{Palette, SpawnSlot};
use crate::simulation::states::NVec2;
use crate::simulation::surface::Surface;

#[derive(Resource, Debug)]
pub struct Simulation {
    parameters: Parameters,
    extent: NVec2, // surface size, fixed at construction
    palette: Palette,
    spawn: SpawnSlot,
    field: GravityField,
    clock: SimulationClock,
}

impl Simulation {
    /// The surface extent is read here once and never again
    pub fn new(parameters: Parameters, palette: Palette, surface: &dyn Surface) -> Self {
        let extent = surface.extent();
        let spawn = SpawnSlot::new(parameters.min_radius, parameters.growth);
        let field = GravityField::new(NewtonianGravity::from_parameters(&parameters));
        let clock = SimulationClock::new(parameters.tick, parameters.max_catch_up);

        Self {
            parameters,
            extent,
            palette,
            spawn,
            field,
            clock,
        }
    }

    /// Build from a (validated) configuration, sized to `surface`
    pub fn build_simulation(cfg: GravitronConfig, surface: &dyn Surface) -> Self {
        let palette = Palette::new(cfg.palette, cfg.seed);
        Self::new(cfg.parameters.to_runtime(), palette, surface)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn extent(&self) -> NVec2 {
        self.extent
    }

    pub fn spawn(&self) -> &SpawnSlot {
        &self.spawn
    }

    pub fn field(&self) -> &GravityField {
        &self.field
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Dispatch a normalized pointer event
    pub fn handle_input(&mut self, event: InputEvent) {
        match event.kind {
            InputKind::Down => match event.position {
                Some(pos) => self.pointer_down(pos),
                None => debug!("pointer-down without a position, ignored"),
            },
            InputKind::Up => self.pointer_up(),
        }
    }

    /// Start ticking if idle, then stage a body at `pos`
    /// A press while a body is already staged draws no color
    pub fn pointer_down(&mut self, pos: NVec2) {
        self.start();
        if self.spawn.is_empty() {
            let color = self.palette.pick();
            self.spawn.init(pos, color);
        }
    }

    /// Move the staged body, if any, into the field
    pub fn pointer_up(&mut self) {
        if let Some(body) = self.spawn.commit() {
            debug!(
                "committing body r={} at ({:.1}, {:.1}), {} in field",
                body.radius,
                body.x.x,
                body.x.y,
                self.field.len() + 1
            );
            self.field.add_body(body);
        }
    }

    /// Idle -> Running; no-op when already running
    pub fn start(&mut self) -> bool {
        let started = self.clock.start();
        if started {
            info!("simulation started, tick every {:?}", self.clock.interval());
        }
        started
    }

    /// Running -> Idle, wiping the field and the surface; no-op when idle
    pub fn stop(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.clock.stop() {
            return false;
        }
        self.field.reset();
        surface.clear();
        info!("simulation stopped");
        true
    }

    /// External reset command. Only acts on a running simulation.
    pub fn reset(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.clock.is_running() {
            return false;
        }
        debug!("reset, discarding {} bodies", self.field.len());
        self.field.reset();
        self.stop(surface)
    }

    /// One tick: clear, grow the staged body, gravity, draw the field
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        self.spawn.grow(self.extent, surface);
        self.field.apply_gravity();
        self.field.render(self.extent, surface);
    }

    /// Feed host frame time and run every tick that came due
    /// Returns the number of ticks run
    pub fn advance(&mut self, elapsed: Duration, surface: &mut dyn Surface) -> u32 {
        let due = self.clock.advance(elapsed);
        for _ in 0..due {
            self.tick(surface);
        }
        due
    }
}
