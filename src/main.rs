//! ==============================================================================
//! main.rs - pi-temp-collector entry point
//! ==============================================================================
//!
//! purpose:
//!     wire the pieces together and hand control to the collector loop:
//!     - load configuration (config/collector.toml or defaults)
//!     - install the logging subscriber (timestamped lines on stdout)
//!     - build the sensor capability and the http publisher
//!     - run the loop until the process is killed
//!
//! there is deliberately nothing else here: no cli flags, no env vars, no
//! background tasks. one thread, one loop.
//!
//! ==============================================================================

use anyhow::Result;
use pi_temp_collector::{collector, CollectorConfig, Dht22Sensor, HttpPublisher};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // step 1: load configuration
    let config = CollectorConfig::load_or_default();

    // step 2: logging - leveled, timestamped text on stdout
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "pi-temp-collector starting: id={} endpoint={} interval={}s sensor_pin={}",
        config.equipment.id,
        config.endpoint.url,
        config.polling.interval_seconds,
        config.sensor.gpio_pin
    );

    // step 3: build the two collaborators
    let sensor = Dht22Sensor::new(config.sensor.gpio_pin);
    let publisher = HttpPublisher::new(&config.endpoint.url)?;

    // step 4: loop forever
    collector::run(&sensor, &publisher, &config)
}
