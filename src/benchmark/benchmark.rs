use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::forces::{GravityField, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::spawn::Palette;
use crate::simulation::states::{Body, BodyColor, NVec2};
use crate::configuration::config::DEFAULT_PALETTE;
use crate::simulation::surface::RecordingSurface;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

/// Deterministic spread of `n` points over the default surface, no rand needed
fn scattered_positions(n: usize) -> Vec<NVec2> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            NVec2::new(
                0.5 * WIDTH + (i_f * 0.37).sin() * 0.45 * WIDTH,
                0.5 * HEIGHT + (i_f * 0.13).cos() * 0.45 * HEIGHT,
            )
        })
        .collect()
}

/// Same spread with radii cycling 5..25, for the field-only pass
fn scattered_bodies(n: usize) -> Vec<Body> {
    scattered_positions(n)
        .into_iter()
        .enumerate()
        .map(|(i, x)| Body::new(x, 5.0 + (i % 20) as f64, BodyColor::rgba(255, 255, 255, 255)))
        .collect()
}

/// Time one gravity pass over growing field sizes
pub fn bench_gravity() {
    // Different field sizes to test
    let ns = [50, 100, 200, 400, 800, 1600];
    let gravity = NewtonianGravity::from_parameters(&Parameters::default());

    for n in ns {
        let mut field = GravityField::new(gravity);
        for b in scattered_bodies(n) {
            field.add_body(b);
        }

        // Warm up
        field.apply_gravity();

        let reps = 10;
        let t0 = Instant::now();
        for _ in 0..reps {
            field.apply_gravity();
        }
        let per_pass = t0.elapsed().as_secs_f64() / reps as f64;

        println!("N = {n:5}, gravity pass = {:10.6} s", per_pass);
    }
}

/// Time whole ticks (clear, grow, gravity, render) and compare against the
/// tick interval to show where the frame budget runs out.
/// Bodies arrive through press/release, so all of them have the spawn radius.
pub fn bench_tick() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let params = Parameters::default();
    let budget = params.tick.as_secs_f64();

    for n in ns {
        let palette = Palette::new(DEFAULT_PALETTE.to_vec(), Some(42));
        let mut surface = RecordingSurface::new(WIDTH, HEIGHT);
        let mut sim = Simulation::new(params.clone(), palette, &surface);

        for x in scattered_positions(n) {
            sim.pointer_down(x);
            sim.pointer_up();
        }

        let ticks = 20;
        let t0 = Instant::now();
        for _ in 0..ticks {
            sim.tick(&mut surface);
        }
        let per_tick = t0.elapsed().as_secs_f64() / ticks as f64;

        println!(
            "N = {n:5}, tick = {:10.6} s, {:6.1}% of the {:.3} s budget, draws = {}",
            per_tick,
            100.0 * per_tick / budget,
            budget,
            surface.draw_calls,
        );
    }
}
