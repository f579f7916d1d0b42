//! Configuration for the VegaIO daemon
//!
//! Loaded from a TOML file; every field has a default so a partial file
//! (or none at all, for bench testing) still yields a runnable config.

use crate::error::{Error, Result};
use crate::link::Credentials;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sensor: SensorConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Sensor bus settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SensorConfig {
    /// I2C bus device path
    #[serde(default = "default_bus")]
    pub bus: String,

    /// 7-bit device address (0x68 with AD0 low)
    #[serde(default = "default_address")]
    pub address: u8,
}

/// Wireless link settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Interface whose carrier state is supervised
    #[serde(default = "default_interface")]
    pub interface: String,

    /// Network name (SSID)
    #[serde(default)]
    pub ssid: String,

    /// WPA2 passphrase
    #[serde(default)]
    pub passphrase: String,

    /// Join attempts per connecting pass
    #[serde(default = "default_join_attempts")]
    pub join_attempts: u32,

    /// Delay between join attempts (milliseconds)
    #[serde(default = "default_join_retry_ms")]
    pub join_retry_ms: u64,
}

/// Telemetry cadence and destination
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Peer IP address receiving the datagrams
    #[serde(default = "default_peer_address")]
    pub peer_address: String,

    /// Peer UDP port
    #[serde(default = "default_peer_port")]
    pub peer_port: u16,

    /// Sample period (milliseconds); 50 ms = 20 records/sec
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

/// Gyroscope calibration policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalibrationConfig {
    /// Number of stationary samples to average
    #[serde(default = "default_samples")]
    pub samples: u32,

    /// Delay between calibration samples (milliseconds)
    #[serde(default = "default_sample_delay_ms")]
    pub sample_delay_ms: u64,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_bus() -> String {
    "/dev/i2c-1".to_string()
}
fn default_address() -> u8 {
    crate::devices::mpu6050::DEFAULT_ADDRESS
}
fn default_interface() -> String {
    "wlan0".to_string()
}
fn default_join_attempts() -> u32 {
    20
}
fn default_join_retry_ms() -> u64 {
    100
}
fn default_peer_address() -> String {
    "127.0.0.1".to_string()
}
fn default_peer_port() -> u16 {
    50000
}
fn default_period_ms() -> u64 {
    50
}
fn default_samples() -> u32 {
    1000
}
fn default_sample_delay_ms() -> u64 {
    2
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            bus: default_bus(),
            address: default_address(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            ssid: String::new(),
            passphrase: String::new(),
            join_attempts: default_join_attempts(),
            join_retry_ms: default_join_retry_ms(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            peer_address: default_peer_address(),
            peer_port: default_peer_port(),
            period_ms: default_period_ms(),
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            sample_delay_ms: default_sample_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Destination socket address for telemetry datagrams
    pub fn peer_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.telemetry.peer_address, self.telemetry.peer_port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid peer address: {}", e)))
    }

    /// Wireless credentials handed to the link supervisor
    pub fn credentials(&self) -> Credentials {
        Credentials {
            ssid: self.network.ssid.clone(),
            passphrase: self.network.passphrase.clone(),
        }
    }

    /// Sample period as a duration
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.telemetry.period_ms)
    }

    /// Inter-sample calibration delay as a duration
    pub fn sample_delay(&self) -> Duration {
        Duration::from_millis(self.calibration.sample_delay_ms)
    }

    /// Delay between join attempts as a duration
    pub fn join_retry(&self) -> Duration {
        Duration::from_millis(self.network.join_retry_ms)
    }
}
