//! Orbit demo application
//!
//! A sun with an orbiting planet and moon. The sun spins, the planet spins in
//! place and carries the moon around with it, and the arrow keys move the
//! whole system. Pass a `.toml` or `.ron` config path to override the window
//! and frame settings.

use vex_engine::foundation::math::utils::deg_to_rad;
use vex_engine::prelude::*;

/// Degrees per second the sun carries its children around
const SUN_SPIN: f32 = 30.0;
/// Degrees per second the planet carries the moon around
const PLANET_SPIN: f32 = 90.0;
/// Units per second the arrow keys move the sun
const MOVE_SPEED: f32 = 2.0;

/// Render hook that traces a body's transform
struct Body;

impl Renderable for Body {
    fn render(&mut self, ctx: &RenderContext<'_>) {
        log::trace!(
            "{}: position ({:.2}, {:.2}, {:.2}) rotation z {:.2}",
            ctx.name,
            ctx.position.x,
            ctx.position.y,
            ctx.position.z,
            ctx.rotation.z
        );
    }
}

struct OrbitApp {
    scene: SceneGraph,
    sun: NodeHandle,
    elapsed: f32,
}

impl OrbitApp {
    fn new() -> Result<Self, SceneError> {
        let mut scene = SceneGraph::new();

        let sun = scene.spawn_renderable("sun", Vec3::zeros(), Vec3::zeros(), Body);
        let planet = scene.spawn_renderable("planet", Vec3::new(4.0, 0.0, 0.0), Vec3::zeros(), Body);
        let moon = scene.spawn_renderable("moon", Vec3::new(5.0, 0.0, 0.0), Vec3::zeros(), Body);

        scene.attach(planet, sun)?;
        scene.attach(moon, planet)?;

        scene.on_update(sun, |scene, node, dt| {
            scene.rotate(node, Vec3::new(0.0, 0.0, deg_to_rad(SUN_SPIN) * dt))
        })?;
        scene.on_update(planet, |scene, node, dt| {
            scene.rotate(node, Vec3::new(0.0, 0.0, deg_to_rad(PLANET_SPIN) * dt))
        })?;

        Ok(Self {
            scene,
            sun,
            elapsed: 0.0,
        })
    }

    fn arrow_input(window: &dyn WindowBackend) -> Vec3 {
        let mut direction = Vec3::zeros();
        if window.is_key_down(Key::Left) {
            direction.x -= 1.0;
        }
        if window.is_key_down(Key::Right) {
            direction.x += 1.0;
        }
        if window.is_key_down(Key::Up) {
            direction.y += 1.0;
        }
        if window.is_key_down(Key::Down) {
            direction.y -= 1.0;
        }
        direction
    }
}

impl Application for OrbitApp {
    fn initialize(&mut self, window: &mut dyn WindowBackend) -> Result<(), AppError> {
        let (width, height) = window.size();
        log::info!("Orbit demo running in a {}x{} window with {} nodes", width, height, self.scene.len());
        Ok(())
    }

    fn update(&mut self, window: &mut dyn WindowBackend, delta_time: f32) -> Result<(), AppError> {
        self.elapsed += delta_time;

        let updated = self.scene.update_all(delta_time)?;
        log::trace!("Updated {} bodies", updated);

        let direction = Self::arrow_input(window);
        if direction != Vec3::zeros() {
            self.scene.move_by(self.sun, direction * MOVE_SPEED * delta_time)?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), AppError> {
        let rendered = self.scene.render_all();
        log::trace!("Rendered {} bodies", rendered);
        Ok(())
    }

    fn cleanup(&mut self) {
        log::info!("Orbit demo ran for {:.1}s", self.elapsed);
    }
}

fn load_config() -> Result<ApplicationConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => Ok(ApplicationConfig::load_from_file(path)?),
        None => Ok(ApplicationConfig::new("Vex Orbit")),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    let mut engine = Engine::new(&config)?;
    let (major, minor) = engine.window().gl_version();
    log::info!("Orbit demo using OpenGL {}.{}", major, minor);
    let mut app = OrbitApp::new()?;
    engine.run(&mut app)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        // Logging may not be up yet if the config failed to load
        eprintln!("orbit_demo: {}", e);
        log::error!("Fatal: {}", e);
        std::process::exit(1);
    }
}
