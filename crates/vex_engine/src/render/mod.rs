//! Rendering platform layer
//!
//! Only the window and its OpenGL context live here. What gets drawn is up to
//! each node's [`Renderable`](crate::scene::Renderable).

pub mod window;

pub use window::{GlError, GlfwWindow, WindowBackend, WindowError};
