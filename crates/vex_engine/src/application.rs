//! Application trait and per-frame hooks

use thiserror::Error;

use crate::render::window::WindowBackend;
use crate::scene::SceneError;

/// Application lifecycle trait
///
/// Implement this trait to drive your game with a
/// [`FrameDriver`](crate::FrameDriver). Each frame the driver calls
/// [`update`](Self::update) and then [`render`](Self::render).
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first frame.
    fn initialize(&mut self, _window: &mut dyn WindowBackend) -> Result<(), AppError> {
        Ok(())
    }

    /// Update the application
    ///
    /// # Arguments
    /// * `window` - The window, for key state queries and closing
    /// * `delta_time` - Time accumulated since the previous frame, in seconds
    fn update(&mut self, window: &mut dyn WindowBackend, delta_time: f32) -> Result<(), AppError>;

    /// Render the application
    ///
    /// Called after update, before the buffers are swapped.
    fn render(&mut self) -> Result<(), AppError> {
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called once when the loop exits.
    fn cleanup(&mut self) {}
}

/// Application built from registered closures.
///
/// Unregistered hooks do nothing.
pub struct FrameHooks {
    init: Box<dyn FnMut()>,
    update: Box<dyn FnMut(f32)>,
    render: Box<dyn FnMut()>,
}

impl FrameHooks {
    /// Create a set of no-op hooks
    pub fn new() -> Self {
        Self {
            init: Box::new(|| {}),
            update: Box::new(|_| {}),
            render: Box::new(|| {}),
        }
    }

    /// Run `hook` once before the first frame
    pub fn register_init_hook(&mut self, hook: impl FnMut() + 'static) -> &mut Self {
        self.init = Box::new(hook);
        self
    }

    /// Run `hook` every frame with the elapsed seconds
    pub fn register_update_hook(&mut self, hook: impl FnMut(f32) + 'static) -> &mut Self {
        self.update = Box::new(hook);
        self
    }

    /// Run `hook` every frame after the update hook
    pub fn register_render_hook(&mut self, hook: impl FnMut() + 'static) -> &mut Self {
        self.render = Box::new(hook);
        self
    }
}

impl Default for FrameHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl Application for FrameHooks {
    fn initialize(&mut self, _window: &mut dyn WindowBackend) -> Result<(), AppError> {
        (self.init)();
        Ok(())
    }

    fn update(&mut self, _window: &mut dyn WindowBackend, delta_time: f32) -> Result<(), AppError> {
        (self.update)(delta_time);
        Ok(())
    }

    fn render(&mut self) -> Result<(), AppError> {
        (self.render)();
        Ok(())
    }
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Scene operation failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
