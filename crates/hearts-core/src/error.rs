use thiserror::Error;

/// Failures the heart field can report to its host.
///
/// Zero-area viewports and huge frame gaps are absorbed locally and never
/// surface here.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid field config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
