//! Staging area for the body under the pointer, and the spawn palette
//!
//! A body lives in the [`SpawnSlot`] from pointer-down to pointer-up,
//! growing every tick. `commit` moves it out; nothing is kept behind.

use bevy::log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::simulation::states::{Body, BodyColor, NVec2};
use crate::simulation::surface::Surface;

#[derive(Debug, Clone)]
pub struct SpawnSlot {
    min_radius: f64,
    growth: f64,
    staged: Option<Body>,
}

impl SpawnSlot {
    pub fn new(min_radius: f64, growth: f64) -> Self {
        Self {
            min_radius,
            growth,
            staged: None,
        }
    }

    /// Stage a new body at `x`. Returns false if one is already staged,
    /// in which case the staged body is left as it was.
    pub fn init(&mut self, x: NVec2, color: BodyColor) -> bool {
        if self.staged.is_some() {
            return false;
        }
        debug!("staging body at ({:.1}, {:.1})", x.x, x.y);
        self.staged = Some(Body::new(x, self.min_radius, color));
        true
    }

    /// Grow and draw the staged body, if any
    pub fn grow(&mut self, extent: NVec2, surface: &mut dyn Surface) {
        if let Some(body) = self.staged.as_mut() {
            body.radius += self.growth;
            body.draw(extent, surface);
        }
    }

    /// Move the staged body out, leaving the slot empty
    pub fn commit(&mut self) -> Option<Body> {
        self.staged.take()
    }

    pub fn staged(&self) -> Option<&Body> {
        self.staged.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_none()
    }
}

/// Fixed set of colors, one drawn uniformly at random per spawn
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<BodyColor>,
    rng: StdRng,
}

impl Palette {
    /// A seed makes the sequence of picks reproducible.
    pub fn new(colors: Vec<BodyColor>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { colors, rng }
    }

    pub fn colors(&self) -> &[BodyColor] {
        &self.colors
    }

    /// Falls back to opaque white on an empty palette
    pub fn pick(&mut self) -> BodyColor {
        self.colors
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(BodyColor::rgba(255, 255, 255, 255))
    }
}
