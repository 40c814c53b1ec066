//! # Vex Engine
//!
//! A small scene-graph scaffold on top of GLFW and OpenGL.
//!
//! ## Features
//!
//! - **Scene hierarchy**: named nodes whose position and rotation changes
//!   propagate to their descendants
//! - **Frame driver**: fixed-rate update and render hooks paced by the window clock
//! - **Node hooks**: each node can carry an [`Updatable`](scene::Updatable)
//!   and a [`Renderable`](scene::Renderable)
//! - **Configuration**: TOML or RON application settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vex_engine::prelude::*;
//!
//! struct MyApp {
//!     scene: SceneGraph,
//! }
//!
//! impl Application for MyApp {
//!     fn update(&mut self, _window: &mut dyn WindowBackend, delta_time: f32) -> Result<(), AppError> {
//!         if let Some(root) = self.scene.find("root") {
//!             self.scene.rotate(root, Vec3::new(0.0, 0.0, delta_time))?;
//!         }
//!         Ok(())
//!     }
//!
//!     fn render(&mut self) -> Result<(), AppError> {
//!         self.scene.render_all();
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut scene = SceneGraph::new();
//!     scene.spawn("root", Vec3::zeros(), Vec3::zeros());
//!
//!     let mut engine = Engine::new(&ApplicationConfig::new("Vex"))?;
//!     engine.run(&mut MyApp { scene })?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{Application, AppError, FrameHooks};
pub use engine::{Engine, EngineError, FrameDriver};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, FrameHooks,
        Engine, EngineError, FrameDriver,
        config::Config,
        core::config::{ApplicationConfig, FrameConfig, LoggingConfig, WindowConfig},
        foundation::{
            math::{Mat4, Mat4Ext, Vec3},
            time::FramePacer,
        },
        render::window::{GlfwWindow, Key, WindowBackend},
        scene::{NodeHandle, RenderContext, Renderable, SceneError, SceneGraph, Updatable},
    };
}
