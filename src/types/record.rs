//! Telemetry record assembly

use super::Vector3;
use serde::{Deserialize, Serialize};

/// One cycle's worth of sensor output, ready for the wire.
///
/// Serializes to the UDP payload shape consumed by the receiver:
///
/// ```json
/// { "accelerometer":      {"x": f, "y": f, "z": f},
///   "gyroscope_rate":     {"x": f, "y": f, "z": f},
///   "gyroscope_absolute": {"x": f, "y": f, "z": f} }
/// ```
///
/// Constructed fresh each cycle and consumed immediately; never retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Linear acceleration (g)
    pub accelerometer: Vector3,
    /// Bias-corrected angular rate (°/s)
    pub gyroscope_rate: Vector3,
    /// Integrated absolute angle (°)
    pub gyroscope_absolute: Vector3,
}

impl TelemetryRecord {
    /// Package the latest readings into a record.
    ///
    /// Any NaN or infinite component is replaced with 0.0 so that a
    /// corrupted bus read never reaches the wire.
    pub fn package(accel: Vector3, calibrated_rate: Vector3, absolute_angle: Vector3) -> Self {
        Self {
            accelerometer: accel.sanitized(),
            gyroscope_rate: calibrated_rate.sanitized(),
            gyroscope_absolute: absolute_angle.sanitized(),
        }
    }
}
