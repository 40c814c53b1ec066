//! Window management using GLFW
//!
//! Opens a window with an OpenGL 3.3 core, forward-compatible context and
//! loads the GL function pointers for it.

use glfw::{Action, Context, Key, WindowEvent};
use thiserror::Error;

use crate::core::config::WindowConfig;

use super::{gl_error::drain_errors, GlError, WindowBackend};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `glfwInit` failed
    #[error("Failed to initialize GLFW")]
    InitializationFailed,

    /// The window or its context could not be created
    #[error("Failed to open GLFW window")]
    CreationFailed,

    /// Any other GLFW failure
    #[error("GLFW error: {0}")]
    GlfwError(String),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window owning the current OpenGL context
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    gl_version: (i32, i32),
}

impl GlfwWindow {
    /// Create the window and make its context current
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_key_polling(true);

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        if !gl::GetError::is_loaded() {
            return Err(WindowError::GlfwError("Failed to load OpenGL functions".to_string()));
        }

        let mut major = 0;
        let mut minor = 0;
        // SAFETY: the context is current on this thread and the functions are loaded.
        unsafe {
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
            gl::GetIntegerv(gl::MAJOR_VERSION, &mut major);
            gl::GetIntegerv(gl::MINOR_VERSION, &mut minor);
        }
        log::info!("OpenGL Version: {}.{}", major, minor);

        Ok(Self {
            glfw,
            window,
            events,
            gl_version: (major, minor),
        })
    }

    fn handle_events(&mut self) {
        for (_, event) in glfw::flush_messages(&self.events) {
            if let WindowEvent::Key(Key::Escape, _, Action::Press, _) = event {
                log::debug!("Escape pressed, closing window");
                self.window.set_should_close(true);
            }
        }
    }
}

impl WindowBackend for GlfwWindow {
    fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn swap_and_poll(&mut self) {
        self.window.swap_buffers();
        self.glfw.poll_events();
        self.handle_events();
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.window.get_key(key) == Action::Press
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    fn gl_version(&self) -> (i32, i32) {
        self.gl_version
    }

    fn check_errors(&mut self) -> Result<(), GlError> {
        // SAFETY: the context created in `new` is current on this thread.
        drain_errors(|| unsafe { gl::GetError() })
    }
}
