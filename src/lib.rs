//! VegaIO - inertial telemetry for a swing-mounted motion sensor
//!
//! This library provides the components of the sampling-calibration-
//! integration-transport pipeline:
//!
//! - register-bus abstraction over Linux I2C (with a mock for testing)
//! - MPU6050 driver and raw-to-physical unit conversion
//! - one-shot gyroscope bias calibration
//! - forward-Euler orientation tracking
//! - best-effort JSON-over-UDP telemetry emission
//! - the main loop driver tying them together

pub mod app;
pub mod bus;
pub mod config;
pub mod devices;
pub mod error;
pub mod imu;
pub mod link;
pub mod streaming;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
