//! ==============================================================================
//! pi-temp-collector - dht22 polling daemon for a raspberry pi
//! ==============================================================================
//!
//! purpose:
//!     samples a dht22 temperature/humidity sensor on a fixed interval and
//!     reports each reading to a remote collection endpoint as a json POST.
//!     every failure (sensor noise, dead endpoint, bad status) is logged and
//!     survived; the process only stops when killed.
//!
//! relationships:
//!     - config.rs    config/collector.toml schema and defaults
//!     - domain.rs    the Reading entity (the wire payload)
//!     - sensor.rs    sensor capability (hardware or mock, behind a trait)
//!     - hub.rs       http transmit to the collector endpoint
//!     - collector.rs the poll loop itself
//!
//! ==============================================================================

pub mod collector;
pub mod config;
pub mod domain;
pub mod hub;
pub mod sensor;

pub use config::CollectorConfig;
pub use domain::Reading;
pub use hub::{HttpPublisher, Publisher};
pub use sensor::{Dht22Sensor, SensorProvider};
