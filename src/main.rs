//! VegaIO - inertial telemetry daemon for a swing-mounted motion sensor
//!
//! Samples an MPU6050 over I2C at a fixed cadence, removes static gyro
//! bias, integrates angular rate into an absolute orientation estimate,
//! and streams JSON datagrams to a fixed UDP peer.

use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use vega_io::app::App;
use vega_io::bus::I2cBus;
use vega_io::devices::Mpu6050;
use vega_io::error::Error;
use vega_io::link::OperstateLink;
use vega_io::{Config, Result};

/// Default configuration path when none is given on the command line
const DEFAULT_CONFIG_PATH: &str = "/etc/vegaio.toml";

/// Parse config path from command line arguments.
///
/// Supports:
/// - `vega-io <path>` (positional)
/// - `vega-io --config <path>` (flag-based)
/// - `vega-io -c <path>` (short flag)
fn parse_config_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    None
}

fn main() -> Result<()> {
    // An explicitly given path must load; the default path may be absent.
    let (config, config_source) = match parse_config_path() {
        Some(path) => (Config::from_file(&path)?, path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => (
            Config::from_file(DEFAULT_CONFIG_PATH)?,
            DEFAULT_CONFIG_PATH.to_string(),
        ),
        None => (Config::default(), "builtin defaults".to_string()),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    log::info!("VegaIO v{} starting...", env!("CARGO_PKG_VERSION"));
    log::info!("Using config: {}", config_source);
    log::info!(
        "Sensor: {} ({:#04x}), peer: {}:{}, period: {} ms",
        config.sensor.bus,
        config.sensor.address,
        config.telemetry.peer_address,
        config.telemetry.peer_port,
        config.telemetry.period_ms
    );

    // Bring up the sensor
    let bus = I2cBus::open(&config.sensor.bus, config.sensor.address)?;
    let mut sensor = Mpu6050::new(bus);
    sensor.initialize()?;
    match sensor.read_temperature() {
        Ok(t) => log::info!("MPU6050 die temperature: {:.1}°C", t),
        Err(e) => log::warn!("Temperature read failed: {}", e),
    }

    let link = OperstateLink::new(&config.network.interface);

    // Shutdown flag raised by Ctrl-C / SIGINT
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    let mut app = App::new(config, sensor, link)?;
    app.run(&running)?;

    log::info!("VegaIO stopped");
    Ok(())
}
