//! Window backend contract consumed by the frame driver

use glfw::Key;

use super::GlError;

/// Operations the frame driver and applications need from a window.
///
/// Everything runs on the thread that created the window.
pub trait WindowBackend {
    /// Seconds since the backend started its clock
    fn time(&self) -> f64;

    /// Whether closing has been requested (user action or [`set_should_close`](Self::set_should_close))
    fn should_close(&self) -> bool;

    /// Request or cancel closing
    fn set_should_close(&mut self, should_close: bool);

    /// Present the back buffer, then process pending window events
    fn swap_and_poll(&mut self);

    /// Whether `key` is currently held down
    fn is_key_down(&self, key: Key) -> bool;

    /// Client area size in pixels
    fn size(&self) -> (u32, u32);

    /// OpenGL context version as (major, minor)
    fn gl_version(&self) -> (i32, i32);

    /// Report the first pending graphics error, if any
    fn check_errors(&mut self) -> Result<(), GlError>;

    /// Request closing
    fn close(&mut self) {
        self.set_should_close(true);
    }
}

/// Whether a context of this version reports errors through debug output
/// (OpenGL 4.3 and newer) instead of needing `glGetError` polling.
pub fn supports_debug_output((major, minor): (i32, i32)) -> bool {
    major > 4 || (major == 4 && minor >= 3)
}
