//! Core state types for the gravity toy.
//!
//! Defines the 2D point-mass `Body` and its display color:
//! - `Body` uses `NVec2` for position and velocity
//! - `BodyColor` is an opaque RGBA token handed to the surface as-is
//!
//! Mass is approximated by radius everywhere in the engine.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::simulation::surface::Surface;

pub type NVec2 = Vector2<f64>;

/// RGBA color token, 8 bits per channel
/// The engine never inspects it, it only passes it through to the surface
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct BodyColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl BodyColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for BodyColor {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<BodyColor> for [u8; 4] {
    fn from(c: BodyColor) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity, per tick
    pub radius: f64, // visual radius, doubles as mass
    pub color: BodyColor,
}

impl Body {
    /// New body at rest
    pub fn new(x: NVec2, radius: f64, color: BodyColor) -> Self {
        Self {
            x,
            v: NVec2::zeros(),
            radius,
            color,
        }
    }

    /// Mass used by the force model
    pub fn mass(&self) -> f64 {
        self.radius
    }

    /// Flip any velocity component that keeps carrying the body further out
    /// of `[0, extent]` on that axis. Bodies are never clamped back inside.
    pub fn reflect(&mut self, extent: NVec2) {
        for axis in 0..2 {
            let pos = self.x[axis];
            let vel = self.v[axis];
            if (pos < 0.0 && vel < 0.0) || (pos > extent[axis] && vel > 0.0) {
                self.v[axis] = -vel;
            }
        }
    }

    /// Explicit Euler step, one tick worth of velocity
    pub fn advance(&mut self) {
        self.x += self.v;
    }

    /// Reflect, advance, then paint one filled disc
    pub fn draw(&mut self, extent: NVec2, surface: &mut dyn Surface) {
        self.reflect(extent);
        self.advance();
        surface.set_fill_color(self.color);
        surface.fill_circle(self.x, self.radius);
    }
}
