//! Error types for booking-engine operations.

use thiserror::Error;

/// Hard failures of the engine.
///
/// Business rejections (no free room, a sentinel room reference) are not
/// errors: they are reported as `None` or `false` by the operations themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The requested date range is not in the future or is reversed.
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// The booking candidate carries no data.
    #[error("Invalid booking: {0}")]
    InvalidBooking(String),

    /// A room catalog or booking store could not be read or written.
    #[error("Storage error: {0}")]
    Store(String),
}

/// Convenience alias used throughout booking-engine.
pub type Result<T> = std::result::Result<T, BookingError>;
