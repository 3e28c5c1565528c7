use thiserror::Error;

/// Errors originating from the core coordinate engine.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid scale: {0} (must be positive and finite)")]
    InvalidScale(f64),

    #[error("invalid zoom speed: {0} (must be finite and > 1.0)")]
    InvalidZoomSpeed(f64),
}
