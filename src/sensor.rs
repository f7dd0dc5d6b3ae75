//! ==============================================================================
//! sensor.rs - sensor capability for the dht22
//! ==============================================================================
//!
//! purpose:
//!     provides the one hardware capability the loop needs: read the dht22
//!     and hand back a (humidity, temperature) pair. the retry-on-noise
//!     policy lives HERE, inside the capability - the loop above treats a
//!     read as a single black-box call that either works or fails.
//!
//! why subprocess to python?:
//!     dht22 sensors require precise bit-banging timing (~microseconds).
//!     pure rust in userspace is unreliable due to lack of real-time
//!     guarantees. the adafruit driver handles the timing compensation, so
//!     the hardware build shells out to it and parses the json it prints.
//!
//! builds:
//!     - feature "hardware": real reads via python3/adafruit_dht
//!     - default: mock sensor with fixed plausible values, for dev machines
//!
//! ==============================================================================

use anyhow::Result;

/// Port for reading the sensor.
///
/// Returns `(humidity %, temperature °C)`. Implementations retry internally;
/// an `Err` means the sample is unusable and the iteration should be skipped.
pub trait SensorProvider: Send {
    fn read_retry(&self) -> Result<(f32, f32)>;
}

// ==============================================================================
// mock implementation (non-hardware build)
// ==============================================================================

#[cfg(not(feature = "hardware"))]
pub struct Dht22Sensor {
    pin: u8,
}

#[cfg(not(feature = "hardware"))]
impl Dht22Sensor {
    pub fn new(pin: u8) -> Self {
        tracing::info!("using MOCK DHT22 sensor (no hardware access)");
        Self { pin }
    }
}

#[cfg(not(feature = "hardware"))]
impl SensorProvider for Dht22Sensor {
    fn read_retry(&self) -> Result<(f32, f32)> {
        tracing::debug!("[MOCK DHT22] reading pin {}", self.pin);
        Ok((48.0, 23.5))
    }
}

// ==============================================================================
// hardware implementation (raspberry pi)
// ==============================================================================

#[cfg(feature = "hardware")]
pub struct Dht22Sensor {
    pin: u8,
    attempts: u32,
    retry_delay: std::time::Duration,
}

#[cfg(feature = "hardware")]
impl Dht22Sensor {
    /// Retry policy matching the adafruit driver's `read_retry`: up to 15
    /// attempts, 2 seconds apart, before the read counts as failed.
    pub fn new(pin: u8) -> Self {
        Self {
            pin,
            attempts: 15,
            retry_delay: std::time::Duration::from_secs(2),
        }
    }

    /// single read attempt via python3 + adafruit_dht
    fn read_once(&self) -> Result<(f32, f32)> {
        use anyhow::anyhow;
        use std::process::Command;

        // python one-liner reading the sensor and printing json on success
        let script = format!(
            r#"
import sys
try:
    import adafruit_dht
    import board
    import json

    dht = adafruit_dht.DHT22(board.D{})

    try:
        h, t = dht.humidity, dht.temperature
        if h is not None and t is not None:
            print(json.dumps({{"h": h, "t": t}}))
        else:
            print("null")
    finally:
        dht.exit()
except Exception as e:
    print(str(e), file=sys.stderr)
    sys.exit(1)
"#,
            self.pin
        );

        let output = Command::new("python3")
            .arg("-c")
            .arg(&script)
            .output()
            .map_err(|e| anyhow!("Failed to run python3: {}", e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("Python error: {}", stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if stdout == "null" || stdout.is_empty() {
            return Err(anyhow!("Sensor returned null"));
        }

        let parsed: serde_json::Value = serde_json::from_str(&stdout)
            .map_err(|e| anyhow!("JSON parse error: {} (got: {})", e, stdout))?;

        let humidity = parsed["h"]
            .as_f64()
            .ok_or_else(|| anyhow!("Missing humidity"))? as f32;
        let temperature = parsed["t"]
            .as_f64()
            .ok_or_else(|| anyhow!("Missing temp"))? as f32;

        Ok((humidity, temperature))
    }
}

#[cfg(feature = "hardware")]
impl SensorProvider for Dht22Sensor {
    fn read_retry(&self) -> Result<(f32, f32)> {
        let mut last_err = None;

        for attempt in 1..=self.attempts {
            match self.read_once() {
                Ok(sample) => return Ok(sample),
                Err(e) => {
                    // dht22 reads are noisy; checksum failures are routine
                    tracing::debug!("dht22 read attempt {}/{} failed: {}", attempt, self.attempts, e);
                    last_err = Some(e);
                    if attempt < self.attempts {
                        std::thread::sleep(self.retry_delay);
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow::anyhow!("sensor read failed")))
    }
}
