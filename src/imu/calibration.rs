//! One-shot gyroscope bias calibration

use crate::error::Result;
use crate::types::Vector3;
use std::time::Duration;

/// Compute the per-axis gyroscope zero-rate bias.
///
/// Accumulates `sample_count` readings with a fixed delay between samples
/// and returns the per-axis mean. The device MUST be stationary for the
/// full duration; motion during calibration corrupts the bias with no
/// detection. Blocks the caller for `sample_count * inter_sample_delay`
/// (about 2 s at the defaults).
///
/// No outlier rejection, no motion detection.
pub fn calibrate_gyro<F>(
    sample_count: u32,
    inter_sample_delay: Duration,
    mut read_gyro: F,
) -> Result<Vector3>
where
    F: FnMut() -> Result<Vector3>,
{
    if sample_count == 0 {
        return Ok(Vector3::zero());
    }

    log::info!(
        "Calibrating gyroscope: {} samples, keep the sensor still...",
        sample_count
    );

    let mut sum = Vector3::zero();
    for _ in 0..sample_count {
        sum += read_gyro()?;
        std::thread::sleep(inter_sample_delay);
    }

    let bias = sum / sample_count as f32;
    log::info!(
        "Gyroscope bias: x={:.3} y={:.3} z={:.3} °/s (|bias|={:.3})",
        bias.x,
        bias.y,
        bias.z,
        bias.magnitude()
    );

    Ok(bias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_samples_yield_exact_bias() {
        let bias = calibrate_gyro(1000, Duration::ZERO, || {
            Ok(Vector3::new(2.0, -1.0, 0.5))
        })
        .unwrap();
        assert_eq!(bias, Vector3::new(2.0, -1.0, 0.5));
    }

    #[test]
    fn test_mean_of_alternating_samples() {
        let mut toggle = false;
        let bias = calibrate_gyro(100, Duration::ZERO, || {
            toggle = !toggle;
            Ok(if toggle {
                Vector3::new(1.0, 0.0, -2.0)
            } else {
                Vector3::new(3.0, 0.0, 2.0)
            })
        })
        .unwrap();
        assert!((bias.x - 2.0).abs() < 1e-5);
        assert_eq!(bias.y, 0.0);
        assert!(bias.z.abs() < 1e-5);
    }

    #[test]
    fn test_zero_samples_yield_zero_bias() {
        let mut calls = 0;
        let bias = calibrate_gyro(0, Duration::ZERO, || {
            calls += 1;
            Ok(Vector3::new(9.0, 9.0, 9.0))
        })
        .unwrap();
        assert_eq!(bias, Vector3::zero());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_read_error_propagates() {
        let result = calibrate_gyro(10, Duration::ZERO, || {
            Err(crate::error::Error::Config("bus gone".to_string()))
        });
        assert!(result.is_err());
    }
}
