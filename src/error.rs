//! Error types for VegaIO

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// VegaIO error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I2C bus error
    #[error("I2C bus error: {0}")]
    Bus(#[from] i2cdev::linux::LinuxI2CError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Register block read returned fewer bytes than requested
    #[error("Short read at register {register:#04x}: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Start register of the block read
        register: u8,
        /// Requested byte count
        expected: usize,
        /// Bytes actually returned
        actual: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
