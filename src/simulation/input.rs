//! Normalized pointer input
//!
//! Hosts translate their raw events into [`InputEvent`] before handing them
//! to the engine; the engine never sees window or DOM event types.

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub kind: InputKind,
    pub position: Option<NVec2>, // surface coordinates, origin top-left
}

impl InputEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self::pointer_down(Some(NVec2::new(x, y)))
    }

    /// Press with whatever position the host could resolve
    pub fn pointer_down(position: Option<NVec2>) -> Self {
        Self {
            kind: InputKind::Down,
            position,
        }
    }

    pub fn up() -> Self {
        Self {
            kind: InputKind::Up,
            position: None,
        }
    }
}
