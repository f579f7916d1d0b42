//! Main loop driver
//!
//! Runs the sampling-calibration-integration-transport pipeline as a
//! `Connecting -> Calibrating -> Streaming` state machine, with
//! `Streaming -> Connecting` on detected link loss. Single-threaded,
//! run-to-completion per cycle; the tick period is the only timing
//! control. The loop never terminates on its own - under persistent link
//! loss it degrades to a no-data state and keeps retrying.

use crate::bus::RegisterBus;
use crate::config::Config;
use crate::devices::Mpu6050;
use crate::error::Result;
use crate::imu::{calibrate_gyro, OrientationTracker};
use crate::link::LinkSupervisor;
use crate::streaming::UdpEmitter;
use crate::types::{TelemetryRecord, Vector3};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Connecting,
    Calibrating,
    Streaming,
}

/// Telemetry loop driver.
///
/// Owns the sensor, the link supervisor, the emitter, and the write-once
/// calibration bias. The orientation state lives inside `run` and is
/// threaded through each cycle by reference.
pub struct App<B: RegisterBus, L: LinkSupervisor> {
    config: Config,
    sensor: Mpu6050<B>,
    link: L,
    emitter: UdpEmitter,
    /// Gyro bias; None until the one-time calibration has run
    bias: Option<Vector3>,
    phase: Phase,
}

impl<B: RegisterBus, L: LinkSupervisor> App<B, L> {
    /// Build the loop driver from an initialized sensor and supervisor
    pub fn new(config: Config, sensor: Mpu6050<B>, link: L) -> Result<Self> {
        let emitter = UdpEmitter::new(config.peer_addr()?)?;
        Ok(Self {
            config,
            sensor,
            link,
            emitter,
            bias: None,
            phase: Phase::Connecting,
        })
    }

    /// Run the loop until `running` is cleared.
    pub fn run(&mut self, running: &AtomicBool) -> Result<()> {
        let mut orientation = OrientationTracker::new(Instant::now());

        while running.load(Ordering::Relaxed) {
            match self.phase {
                Phase::Connecting => {
                    if self.try_join(running) {
                        if self.bias.is_some() {
                            // Reconnect: calibration is once per process, and
                            // time spent offline is excluded from integration.
                            orientation.rearm(Instant::now());
                            log::info!("Link restored, resuming streaming");
                            self.phase = Phase::Streaming;
                        } else {
                            self.phase = Phase::Calibrating;
                        }
                    }
                    // On exhaustion stay in Connecting; the next pass retries.
                }
                Phase::Calibrating => match self.run_calibration() {
                    Ok(bias) => {
                        self.bias = Some(bias);
                        orientation.rearm(Instant::now());
                        log::info!("Streaming at {} ms period", self.config.telemetry.period_ms);
                        self.phase = Phase::Streaming;
                    }
                    Err(e) => {
                        log::error!("Calibration failed: {}; retrying", e);
                        std::thread::sleep(self.config.period());
                    }
                },
                Phase::Streaming => {
                    let cycle_start = Instant::now();

                    if !self.link.is_connected() {
                        log::warn!("Link lost, reconnecting...");
                        self.phase = Phase::Connecting;
                        continue;
                    }

                    if let Err(e) = self.cycle(&mut orientation) {
                        log::warn!("Sensor cycle skipped: {}", e);
                    }

                    let elapsed = cycle_start.elapsed();
                    let period = self.config.period();
                    if elapsed < period {
                        std::thread::sleep(period - elapsed);
                    }
                }
            }
        }

        log::info!("Telemetry loop stopped");
        Ok(())
    }

    /// One streaming cycle: read, correct, integrate, package, emit.
    fn cycle(&mut self, orientation: &mut OrientationTracker) -> Result<()> {
        let accel = self.sensor.read_accel()?;
        let raw_rate = self.sensor.read_gyro()?;

        let rate = raw_rate - self.bias.unwrap_or_default();
        let angle = orientation.integrate(rate, Instant::now());

        let record = TelemetryRecord::package(accel, rate, angle);
        self.emitter.send(&record);
        Ok(())
    }

    /// Bounded join-retry pass. Returns true once the link is up.
    fn try_join(&mut self, running: &AtomicBool) -> bool {
        let credentials = self.config.credentials();
        let attempts = self.config.network.join_attempts;

        for attempt in 1..=attempts {
            if !running.load(Ordering::Relaxed) {
                return false;
            }
            if self.link.join(&credentials) {
                log::info!("Link up (attempt {}/{})", attempt, attempts);
                return true;
            }
            log::debug!("Join attempt {}/{} failed", attempt, attempts);
            std::thread::sleep(self.config.join_retry());
        }

        log::warn!("Link join failed after {} attempts; will retry", attempts);
        false
    }

    /// One-time stationary gyro calibration.
    fn run_calibration(&mut self) -> Result<Vector3> {
        let sensor = &mut self.sensor;
        calibrate_gyro(
            self.config.calibration.samples,
            self.config.sample_delay(),
            || sensor.read_gyro(),
        )
    }
}
