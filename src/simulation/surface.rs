//! Drawing surface contract used by the engine
//!
//! The engine only ever clears the whole surface, selects a fill color and
//! fills circles. Hosts implement [`Surface`] on top of whatever they render
//! with; [`RecordingSurface`] keeps the calls in memory for headless runs.

use crate::simulation::states::{BodyColor, NVec2};

pub trait Surface {
    /// Pixel extent (width, height). Read once when the simulation is built.
    fn extent(&self) -> NVec2;

    /// Clear the rectangle covering the whole surface
    fn clear(&mut self);

    fn set_fill_color(&mut self, color: BodyColor);

    /// Fill a circle at `center` with the current fill color
    fn fill_circle(&mut self, center: NVec2, radius: f64);
}

/// One filled disc as it was issued to the surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: NVec2,
    pub radius: f64,
    pub color: BodyColor,
}

/// In-memory surface
/// `discs` holds what is currently painted, `draw_calls` counts fills
/// across clears
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    fill: BodyColor,
    pub discs: Vec<Disc>,
    pub draw_calls: usize,
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill: BodyColor::rgba(0, 0, 0, 255),
            discs: Vec::new(),
            draw_calls: 0,
            clears: 0,
        }
    }
}

impl Surface for RecordingSurface {
    fn extent(&self) -> NVec2 {
        NVec2::new(self.width, self.height)
    }

    fn clear(&mut self) {
        self.discs.clear();
        self.clears += 1;
    }

    fn set_fill_color(&mut self, color: BodyColor) {
        self.fill = color;
    }

    fn fill_circle(&mut self, center: NVec2, radius: f64) {
        self.discs.push(Disc {
            center,
            radius,
            color: self.fill,
        });
        self.draw_calls += 1;
    }
}
