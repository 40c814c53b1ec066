//! Window management subsystem
//!
//! ```text
//! FrameDriver ──uses──► WindowBackend (backend.rs)
//!                          ▲
//!                          │ implemented by
//!                       GlfwWindow (glfw_window.rs), test doubles
//! ```
//!
//! The driver only needs a clock, a should-close flag, buffer swap plus event
//! polling and an error check, so tests can run it without a display.

pub mod backend;
pub mod gl_error;
#[allow(unsafe_code)]
pub mod glfw_window;

pub use backend::{supports_debug_output, WindowBackend};
pub use gl_error::{drain_errors, GlError};
pub use glfw_window::{GlfwWindow, WindowError, WindowResult};
pub use glfw::Key;
