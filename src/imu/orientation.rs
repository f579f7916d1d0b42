//! Absolute orientation tracking by rate integration

use crate::types::Vector3;
use std::time::Instant;

/// Running absolute-angle estimate, advanced once per loop cycle.
///
/// Forward-Euler integration of calibrated angular rate: each update adds
/// `rate * elapsed_seconds` per axis. Integration error accumulates
/// unboundedly over the session; there is no drift correction.
pub struct OrientationTracker {
    angle: Vector3,
    last_update: Instant,
}

impl OrientationTracker {
    /// Create a tracker at angle (0, 0, 0).
    ///
    /// `now` must be taken immediately before the loop starts so the
    /// first integration step measures real elapsed time rather than a
    /// jump from an arbitrary clock base.
    pub fn new(now: Instant) -> Self {
        Self {
            angle: Vector3::zero(),
            last_update: now,
        }
    }

    /// Advance the estimate with the latest calibrated rate (°/s).
    ///
    /// Returns the updated absolute angle.
    pub fn integrate(&mut self, calibrated_rate: Vector3, now: Instant) -> Vector3 {
        let elapsed = now.duration_since(self.last_update).as_secs_f32();
        self.angle += calibrated_rate * elapsed;
        self.last_update = now;
        self.angle
    }

    /// Re-arm the integration timestamp without touching the angle.
    ///
    /// Called on each entry to the streaming phase so that time spent
    /// calibrating or reconnecting is excluded from the next step.
    pub fn rearm(&mut self, now: Instant) {
        self.last_update = now;
    }

    /// Current absolute angle (°)
    pub fn angle(&self) -> Vector3 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_constant_rate_for_one_second() {
        let t0 = Instant::now();
        let mut tracker = OrientationTracker::new(t0);

        let angle = tracker.integrate(Vector3::new(10.0, 0.0, 0.0), t0 + Duration::from_secs(1));
        assert!((angle.x - 10.0).abs() < 1e-4, "angle.x={}", angle.x);
        assert_eq!(angle.y, 0.0);
        assert_eq!(angle.z, 0.0);
    }

    #[test]
    fn test_time_slicing_is_associative() {
        let rate = Vector3::new(4.0, -2.0, 1.5);
        let t0 = Instant::now();

        let mut sliced = OrientationTracker::new(t0);
        sliced.integrate(rate, t0 + Duration::from_millis(300));
        let a = sliced.integrate(rate, t0 + Duration::from_millis(1000));

        let mut whole = OrientationTracker::new(t0);
        let b = whole.integrate(rate, t0 + Duration::from_millis(1000));

        assert!((a.x - b.x).abs() < 1e-4);
        assert!((a.y - b.y).abs() < 1e-4);
        assert!((a.z - b.z).abs() < 1e-4);
    }

    #[test]
    fn test_accumulates_across_updates() {
        let t0 = Instant::now();
        let mut tracker = OrientationTracker::new(t0);

        tracker.integrate(Vector3::new(0.0, 0.0, 20.0), t0 + Duration::from_millis(500));
        let angle = tracker.integrate(
            Vector3::new(0.0, 0.0, -20.0),
            t0 + Duration::from_millis(1500),
        );
        // +10° then -20° on the z axis
        assert!((angle.z + 10.0).abs() < 1e-4, "angle.z={}", angle.z);
        assert_eq!(tracker.angle(), angle);
    }

    #[test]
    fn test_rearm_excludes_dead_time() {
        let t0 = Instant::now();
        let mut tracker = OrientationTracker::new(t0);

        tracker.integrate(Vector3::new(10.0, 0.0, 0.0), t0 + Duration::from_secs(1));

        // A 30 s excursion (reconnect) passes, then the tracker is re-armed.
        let resume = t0 + Duration::from_secs(31);
        tracker.rearm(resume);
        let angle = tracker.integrate(Vector3::new(10.0, 0.0, 0.0), resume + Duration::from_secs(1));

        // Only 2 s of streaming time should have integrated.
        assert!((angle.x - 20.0).abs() < 1e-3, "angle.x={}", angle.x);
    }
}
