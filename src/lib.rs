pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyColor, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{GravityField, NewtonianGravity};
pub use simulation::spawn::{Palette, SpawnSlot};
pub use simulation::clock::{ClockState, SimulationClock, TickHandle};
pub use simulation::surface::{Disc, RecordingSurface, Surface};
pub use simulation::input::{InputEvent, InputKind};
pub use simulation::engine::Simulation;

pub use configuration::config::{GravitronConfig, ParametersConfig, SurfaceConfig, DEFAULT_PALETTE};
pub use configuration::error::ConfigError;

pub use visualization::gravitron_vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_tick};
