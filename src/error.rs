//! Error types for field and driver operations.

/// Errors surfaced by field operations.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("Terminal not initialized")]
    NotInitialized,

    #[error("Unknown border style: {0}")]
    UnknownStyle(String),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Errors surfaced by a terminal driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Terminal already initialized")]
    AlreadyInitialized,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal backend failed: {0}")]
    Backend(String),
}
