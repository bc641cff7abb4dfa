use std::collections::HashMap;

use bevy::log::{error, info};
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::configuration::config::GravitronConfig;
use crate::simulation::engine::Simulation;
use crate::simulation::input::InputEvent;
use crate::simulation::states::{BodyColor, NVec2};
use crate::simulation::surface::{Disc, Surface};

/// Marks a disc entity spawned for the current frame
#[derive(Component)]
struct DiscSprite;

/// Unit circle shared by every disc, scaled per body
#[derive(Resource)]
struct UnitCircle(Mesh2dHandle);

/// Surface the engine paints into. Holds the discs of the last frame until
/// the presenter turns them into meshes.
#[derive(Resource)]
pub struct FrameSurface {
    width: f64,
    height: f64,
    fill: BodyColor,
    discs: Vec<Disc>,
    dirty: bool, // changed since last presented
}

impl FrameSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill: BodyColor::rgba(255, 255, 255, 255),
            discs: Vec::new(),
            dirty: true,
        }
    }

    /// Surface coordinates (origin top-left, y down) to world space
    /// (origin at the window center, y up)
    fn to_world(&self, p: NVec2) -> Vec2 {
        Vec2::new((p.x - 0.5 * self.width) as f32, (0.5 * self.height - p.y) as f32)
    }
}

impl Surface for FrameSurface {
    fn extent(&self) -> NVec2 {
        NVec2::new(self.width, self.height)
    }

    fn clear(&mut self) {
        self.discs.clear();
        self.dirty = true;
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
        self.dirty = true;
    }
}

pub fn run_2d(cfg: GravitronConfig) {
    let (width, height) = (cfg.surface.width, cfg.surface.height);
    let surface = FrameSurface::new(width, height);
    let simulation = Simulation::build_simulation(cfg, &surface);

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(simulation)
        .insert_resource(surface)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "gravitron".into(),
                resolution: WindowResolution::new(width as f32, height as f32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(Update, (input_system, step_system, present_system).chain())
        .run();
}

fn setup_system(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>, simulation: Res<Simulation>) {
    let extent = simulation.extent();
    info!(
        "run_2d: starting Bevy 2D viewer on a {}x{} surface, tick {:?}",
        extent.x,
        extent.y,
        simulation.parameters().tick
    );

    // 2D camera
    commands.spawn(Camera2dBundle::default());
    commands.insert_resource(UnitCircle(Mesh2dHandle(meshes.add(Circle::new(1.0)))));
}

/// Pointer and keyboard events -> engine input
fn input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut simulation: ResMut<Simulation>,
    mut surface: ResMut<FrameSurface>,
    mut exit: EventWriter<AppExit>,
) {
    let Ok(window) = windows.get_single() else {
        error!("primary window is gone, no surface to draw on");
        exit.send(AppExit::error());
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        // Cursor is already top-left based, matching surface coordinates
        let position = window.cursor_position().map(|c| NVec2::new(c.x as f64, c.y as f64));
        simulation.handle_input(InputEvent::pointer_down(position));
    }
    if buttons.just_released(MouseButton::Left) {
        simulation.handle_input(InputEvent::up());
    }
    if keys.just_pressed(KeyCode::KeyR) {
        simulation.reset(&mut *surface);
    }
}

fn step_system(time: Res<Time>, mut simulation: ResMut<Simulation>, mut surface: ResMut<FrameSurface>) {
    simulation.advance(time.delta(), &mut *surface);
}

/// Rebuild the disc entities whenever the surface changed
fn present_system(
    mut commands: Commands,
    mut surface: ResMut<FrameSurface>,
    unit: Res<UnitCircle>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut cache: Local<HashMap<BodyColor, Handle<ColorMaterial>>>,
    old: Query<Entity, With<DiscSprite>>,
) {
    if !surface.dirty {
        return;
    }
    surface.dirty = false;
    let surface = &*surface;

    for e in &old {
        commands.entity(e).despawn();
    }

    for (i, disc) in surface.discs.iter().enumerate() {
        let material = cache
            .entry(disc.color)
            .or_insert_with(|| {
                let c = disc.color;
                materials.add(ColorMaterial::from(Color::srgba_u8(c.r, c.g, c.b, c.a)))
            })
            .clone();
        let pos = surface.to_world(disc.center);

        // Later draws sit on top, like painting on a canvas
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: unit.0.clone(),
                material,
                transform: Transform::from_xyz(pos.x, pos.y, i as f32 * 1e-3)
                    .with_scale(Vec3::splat(disc.radius as f32)),
                ..Default::default()
            },
            DiscSprite,
        ));
    }
}
