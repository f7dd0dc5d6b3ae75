//! ==============================================================================
//! config.rs - Runtime Configuration Loader
//! ==============================================================================
//!
//! purpose:
//!     defines the schema for `config/collector.toml`.
//!     loads configuration from file or falls back to defaults.
//!
//! structure:
//!     - EndpointConfig:  where readings are POSTed.
//!     - EquipmentConfig: identity of this device.
//!     - PollingConfig:   how often the loop samples the sensor.
//!     - SensorConfig:    which GPIO pin the DHT22 data line is on.
//!     - LoggingConfig:   log level filter.
//!
//! ==============================================================================

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CollectorConfig {
    pub endpoint: EndpointConfig,
    pub equipment: EquipmentConfig,
    pub polling: PollingConfig,
    pub sensor: SensorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EquipmentConfig {
    pub id: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PollingConfig {
    pub interval_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SensorConfig {
    pub gpio_pin: u8,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl CollectorConfig {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let config: CollectorConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))?;

        Ok(config)
    }

    /// Load with default fallback
    ///
    /// Never fatal: a missing or broken file means the built-in defaults run.
    pub fn load_or_default() -> Self {
        let paths = [
            std::path::PathBuf::from("config").join("collector.toml"),
            std::path::PathBuf::from("..").join("config").join("collector.toml"),
        ];

        for path in &paths {
            if path.exists() {
                match Self::load(path) {
                    Ok(config) => {
                        println!("[CONFIG] Loaded from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        println!("[CONFIG] Warning: Failed to load {}: {}", path.display(), e);
                    }
                }
            }
        }

        println!("[CONFIG] Warning: No config file found - using defaults");
        Self::default()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.polling.interval_seconds)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            equipment: EquipmentConfig::default(),
            polling: PollingConfig::default(),
            sensor: SensorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://192.168.2.16:8081/api/temp/internal".to_string(),
        }
    }
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            id: "pi0".to_string(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 600,
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self { gpio_pin: 4 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment_constants() {
        let config = CollectorConfig::default();
        assert_eq!(config.endpoint.url, "http://192.168.2.16:8081/api/temp/internal");
        assert_eq!(config.equipment.id, "pi0");
        assert_eq!(config.polling.interval_seconds, 600);
        assert_eq!(config.sensor.gpio_pin, 4);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: CollectorConfig = toml::from_str(
            r#"
            [equipment]
            id = "pi3"

            [polling]
            interval_seconds = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.equipment.id, "pi3");
        assert_eq!(config.polling.interval_seconds, 30);
        // untouched sections keep their defaults
        assert_eq!(config.sensor.gpio_pin, 4);
        assert_eq!(config.endpoint.url, "http://192.168.2.16:8081/api/temp/internal");
    }

    #[test]
    fn garbage_toml_is_an_error() {
        assert!(toml::from_str::<CollectorConfig>("not = [valid").is_err());
    }

    #[test]
    fn poll_interval_is_seconds() {
        let config = CollectorConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(600));
    }
}
