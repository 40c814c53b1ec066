//! Core engine implementation

use thiserror::Error;

use crate::{
    application::Application,
    config::ConfigError,
    core::config::{ApplicationConfig, FrameConfig},
    foundation::{logging, time::FramePacer},
    render::window::{supports_debug_output, GlError, GlfwWindow, WindowBackend, WindowError},
};

/// Paces update and render calls against a window's clock.
///
/// Each loop iteration reads the window time and feeds the elapsed time to a
/// [`FramePacer`]. When a frame is due the application is updated with the
/// accumulated seconds, rendered, and the window swaps buffers and polls
/// events. On contexts older than OpenGL 4.3 the GL error queue is checked
/// after every frame and any error ends the loop. The loop exits once the
/// window reports it should close.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    pacer: FramePacer,
}

impl FrameDriver {
    /// Create a driver for the configured frame rate
    pub fn new(config: &FrameConfig) -> Self {
        Self {
            pacer: FramePacer::new(config.target_fps),
        }
    }

    /// Frame pacing state
    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    /// Run `app` until the window should close.
    ///
    /// `cleanup` runs whether the loop ended normally or with an error.
    pub fn run<W, A>(&mut self, window: &mut W, app: &mut A) -> Result<(), EngineError>
    where
        W: WindowBackend,
        A: Application + ?Sized,
    {
        app.initialize(window)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {}", e)))?;

        let check_errors = !supports_debug_output(window.gl_version());
        log::info!(
            "Starting main loop at {:.1} fps (GL error polling: {})",
            1.0 / self.pacer.frame_time(),
            check_errors
        );

        let result = self.drive(window, app, check_errors);

        app.cleanup();
        match &result {
            Ok(()) => log::info!("Main loop finished after {} frames", self.pacer.frame_count()),
            Err(e) => log::error!("Main loop aborted after {} frames: {}", self.pacer.frame_count(), e),
        }
        result
    }

    fn drive<W, A>(&mut self, window: &mut W, app: &mut A, check_errors: bool) -> Result<(), EngineError>
    where
        W: WindowBackend,
        A: Application + ?Sized,
    {
        let mut last_time = window.time();
        loop {
            let current_time = window.time();
            let dt = current_time - last_time;
            last_time = current_time;

            if let Some(elapsed) = self.pacer.advance(dt) {
                app.update(window, elapsed as f32)
                    .map_err(|e| EngineError::ApplicationError(format!("App update: {}", e)))?;
                app.render()
                    .map_err(|e| EngineError::ApplicationError(format!("App render: {}", e)))?;
                window.swap_and_poll();
                if check_errors {
                    window.check_errors()?;
                }
            }

            if window.should_close() {
                return Ok(());
            }
        }
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(&FrameConfig::default())
    }
}

/// Main engine struct
///
/// Owns the GLFW window and the frame driver.
pub struct Engine {
    window: GlfwWindow,
    driver: FrameDriver,
}

impl Engine {
    /// Initialize logging, validate the configuration and open the window
    pub fn new(config: &ApplicationConfig) -> Result<Self, EngineError> {
        logging::init(&config.logging);
        config.validate()?;

        log::info!(
            "Initializing engine: \"{}\" {}x{}",
            config.window.title,
            config.window.width,
            config.window.height
        );
        let window = GlfwWindow::new(&config.window)?;

        Ok(Self {
            window,
            driver: FrameDriver::new(&config.frame),
        })
    }

    /// Run the main loop with the given application
    pub fn run<A: Application + ?Sized>(&mut self, app: &mut A) -> Result<(), EngineError> {
        self.driver.run(&mut self.window, app)
    }

    /// The window
    pub fn window(&self) -> &GlfwWindow {
        &self.window
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window or context creation failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// The graphics API reported an error
    #[error("OpenGL error: {0}")]
    Graphics(#[from] GlError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}
