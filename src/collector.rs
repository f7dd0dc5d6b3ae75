//! ==============================================================================
//! collector.rs - the poll loop
//! ==============================================================================
//!
//! purpose:
//!     drives the cycle the daemon exists for:
//!         read sensor -> validate -> build Reading -> transmit -> sleep
//!     forever. each iteration fully completes (or fails and is logged)
//!     before the next begins. there is no internal exit condition; only an
//!     external signal stops the process.
//!
//! error model:
//!     - sensor read failure: logged, transmission skipped, loop continues
//!     - transmit failure:    logged with details, loop continues
//!     the sleep happens unconditionally, success or failure. a failed read
//!     does not back off or change the interval.
//!
//! ==============================================================================

use crate::config::CollectorConfig;
use crate::domain::Reading;
use crate::hub::Publisher;
use crate::sensor::SensorProvider;

/// One iteration: sample, validate, transmit. Never panics, never returns an
/// error; both failure modes are logged and swallowed here.
pub fn collect_once(sensor: &dyn SensorProvider, publisher: &dyn Publisher, equipment_id: &str) {
    match sensor.read_retry() {
        Ok((humidity, temperature)) => {
            tracing::info!(
                "id={} temperature={:.1}*C humidity={:.1}%",
                equipment_id,
                temperature,
                humidity
            );

            let reading = Reading::new(equipment_id, temperature, humidity);
            if let Err(e) = publisher.publish(&reading) {
                tracing::error!("post temp fail with error: {:#}", e);
            }
        }
        Err(e) => {
            tracing::error!("failed to retrieve data from humidity sensor: {:#}", e);
        }
    }
}

/// The loop. Blocking sleep between iterations; runs until the process is
/// killed.
pub fn run(sensor: &dyn SensorProvider, publisher: &dyn Publisher, config: &CollectorConfig) -> ! {
    let interval = config.poll_interval();
    tracing::info!(
        "starting collector loop ({}s interval)",
        config.polling.interval_seconds
    );

    loop {
        collect_once(sensor, publisher, &config.equipment.id);
        std::thread::sleep(interval);
    }
}
