pub mod compensated;
pub mod coordinate;
pub mod error;
pub mod view;

// Re-export primary types for convenience.
pub use compensated::Compensated;
pub use coordinate::Coordinate;
pub use error::CoreError;
pub use view::{FractalView, PrecisionMode, EXTENDED_PRECISION_THRESHOLD};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
