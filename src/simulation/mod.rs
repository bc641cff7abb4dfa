pub mod states;
pub mod params;
pub mod surface;
pub mod input;
pub mod forces;
pub mod spawn;
pub mod clock;
pub mod engine;
