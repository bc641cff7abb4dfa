//! Gravity for the committed bodies
//!
//! Defines the capped, softened pairwise force and [`GravityField`], the
//! owner of every committed body. The pass is a direct O(n^2) sum over
//! unordered pairs, there is no tree or cutoff.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};
use crate::simulation::surface::Surface;

/// Pairwise gravity settings, copied out of [`Parameters`]
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub max_force: f64, // force cap
    pub softening: f64, // distance softening
}

impl NewtonianGravity {
    pub fn from_parameters(p: &Parameters) -> Self {
        Self {
            G: p.G,
            max_force: p.max_force,
            softening: p.softening,
        }
    }

    /// Softened separation for a displacement `delta`
    pub fn distance(&self, delta: NVec2) -> f64 {
        delta.norm() + self.softening
    }

    /// Force on the pair, capped at `max_force`, before decomposition
    pub fn magnitude(&self, distance: f64, m1: f64, m2: f64) -> f64 {
        let raw = self.G * m1 * m2 / (distance * distance);
        raw.min(self.max_force)
    }

    /// Force vector along `delta` for masses `m1` and `m2`
    /// `delta` is the displacement of body 1 relative to body 2, so body 1
    /// is pulled along `-result` and body 2 along `+result`
    pub fn pair_force(&self, delta: NVec2, m1: f64, m2: f64) -> NVec2 {
        let distance = self.distance(delta);
        let force = self.magnitude(distance, m1, m2);

        // delta / distance is a unit vector only up to softening,
        // at zero separation it is the zero vector
        delta * (force / distance)
    }
}

/// Owns the committed bodies. Insertion order only fixes pair visiting order.
#[derive(Debug, Clone)]
pub struct GravityField {
    gravity: NewtonianGravity,
    bodies: Vec<Body>,
}

impl GravityField {
    pub fn new(gravity: NewtonianGravity) -> Self {
        Self {
            gravity,
            bodies: Vec::new(),
        }
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    /// Take ownership of a committed body
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Accumulate one tick of pairwise gravity into every body's velocity
    /// Positions are left untouched, they move in `render`
    pub fn apply_gravity(&mut self) {
        let n = self.bodies.len();
        if n < 2 { // Nothing to pair up
            return;
        }

        // Loop over each unordered pair (i, j) with j < i
        for i in 1..n {
            // Split so bi (index i) and bj (index j < i) can both be borrowed mutably
            let (head, tail) = self.bodies.split_at_mut(i);
            let bi = &mut tail[0];

            for bj in head.iter_mut() {
                let mi = bi.mass();
                let mj = bj.mass();

                // delta points from j to i
                let f = self.gravity.pair_force(bi.x - bj.x, mi, mj);

                // Equal and opposite, each side divided by its own mass:
                // i is pulled back toward j, j is pulled toward i
                bi.v -= f / mi;
                bj.v += f / mj;
            }
        }
    }

    /// Draw every committed body in insertion order
    pub fn render(&mut self, extent: NVec2, surface: &mut dyn Surface) {
        for body in self.bodies.iter_mut() {
            body.draw(extent, surface);
        }
    }

    /// Drop all committed bodies
    pub fn reset(&mut self) {
        self.bodies.clear();
    }
}
