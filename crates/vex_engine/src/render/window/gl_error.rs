//! OpenGL error codes

use thiserror::Error;

/// An error reported by `glGetError`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    /// `GL_INVALID_ENUM`
    #[error("GL_INVALID_ENUM")]
    InvalidEnum,
    /// `GL_INVALID_VALUE`
    #[error("GL_INVALID_VALUE")]
    InvalidValue,
    /// `GL_INVALID_OPERATION`
    #[error("GL_INVALID_OPERATION")]
    InvalidOperation,
    /// `GL_STACK_OVERFLOW`
    #[error("GL_STACK_OVERFLOW")]
    StackOverflow,
    /// `GL_STACK_UNDERFLOW`
    #[error("GL_STACK_UNDERFLOW")]
    StackUnderflow,
    /// `GL_OUT_OF_MEMORY`
    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,
    /// `GL_INVALID_FRAMEBUFFER_OPERATION`
    #[error("GL_INVALID_FRAMEBUFFER_OPERATION")]
    InvalidFramebufferOperation,
    /// `GL_CONTEXT_LOST`
    #[error("GL_CONTEXT_LOST")]
    ContextLost,
    /// Any other code
    #[error("unknown GL error 0x{0:04X}")]
    Unknown(u32),
}

impl GlError {
    /// Map a non-zero `glGetError` code
    pub fn from_code(code: gl::types::GLenum) -> Self {
        match code {
            gl::INVALID_ENUM => Self::InvalidEnum,
            gl::INVALID_VALUE => Self::InvalidValue,
            gl::INVALID_OPERATION => Self::InvalidOperation,
            gl::STACK_OVERFLOW => Self::StackOverflow,
            gl::STACK_UNDERFLOW => Self::StackUnderflow,
            gl::OUT_OF_MEMORY => Self::OutOfMemory,
            gl::INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
            gl::CONTEXT_LOST => Self::ContextLost,
            other => Self::Unknown(other),
        }
    }
}

/// Drain an error queue such as `glGetError`.
///
/// Calls `next` until it yields `GL_NO_ERROR`, logging every error, and
/// returns the first one. `GL_CONTEXT_LOST` is reported on every call once
/// the context is gone, so draining stops there.
pub fn drain_errors(mut next: impl FnMut() -> gl::types::GLenum) -> Result<(), GlError> {
    let mut first = None;
    loop {
        let code = next();
        if code == gl::NO_ERROR {
            break;
        }
        let error = GlError::from_code(code);
        log::error!("{}", error);
        first.get_or_insert(error);
        if error == GlError::ContextLost {
            break;
        }
    }
    first.map_or(Ok(()), Err)
}
