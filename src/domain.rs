use serde::Serialize;

/// One sampled (temperature, humidity) pair plus metadata, ready for
/// transmission. Built fresh each loop iteration, sent, dropped.
#[derive(Clone, Debug, Serialize)]
pub struct Reading {
    /// fixed string identifying this device to the remote collector
    pub id: String,
    /// temperature in celsius, unrounded
    pub temperature: f32,
    /// seconds since unix epoch, captured at transmission time
    pub timestamp: u64,
    /// relative humidity, rounded to the nearest whole percent
    pub humidity: u8,
}

impl Reading {
    /// Build a reading from a raw sensor sample.
    ///
    /// Only called once both halves of the sample are known good; a failed
    /// sensor read never produces a `Reading`.
    pub fn new(equipment_id: &str, temperature: f32, humidity: f32) -> Self {
        Self {
            id: equipment_id.to_string(),
            temperature,
            timestamp: unix_now(),
            humidity: humidity.round() as u8,
        }
    }
}

/// current timestamp in whole seconds (unix epoch)
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humidity_rounds_to_nearest_integer() {
        let reading = Reading::new("pi0", 21.37, 55.4);
        assert_eq!(reading.humidity, 55);

        let reading = Reading::new("pi0", 21.37, 55.5);
        assert_eq!(reading.humidity, 56);
    }

    #[test]
    fn temperature_stays_unrounded() {
        let reading = Reading::new("pi0", 21.37, 55.4);
        assert_eq!(reading.temperature, 21.37);
    }

    #[test]
    fn wire_payload_has_exactly_the_expected_fields() {
        let reading = Reading::new("pi0", 21.37, 55.4);
        let value: serde_json::Value = serde_json::to_value(&reading).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["id"], "pi0");
        assert_eq!(obj["humidity"], 55);
        assert!(obj["humidity"].is_u64());
        assert!((obj["temperature"].as_f64().unwrap() - 21.37).abs() < 1e-4);
        assert!(obj["timestamp"].as_u64().unwrap() > 0);
    }

    #[test]
    fn timestamp_is_captured_at_construction() {
        let before = unix_now();
        let reading = Reading::new("pi0", 20.0, 50.0);
        let after = unix_now();
        assert!(reading.timestamp >= before && reading.timestamp <= after);
    }
}
