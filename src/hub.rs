//! ==============================================================================
//! hub.rs - transmit readings to the collector endpoint
//! ==============================================================================
//!
//! purpose:
//!     the outbound half of the loop: serialize a Reading to json and POST it
//!     to the collector endpoint. exactly http 200 counts as success; any
//!     other status, or any network-level failure (refused, dns, timeout),
//!     surfaces as an error for the caller to log. errors never escape an
//!     iteration of the loop.
//!
//! ==============================================================================

use crate::domain::Reading;
use anyhow::{anyhow, Context, Result};
use reqwest::StatusCode;
use std::time::Duration;

/// Request timeout so a dead endpoint cannot wedge the loop past one cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Port for publishing readings
///
/// Abstracts the wire so the loop can be exercised against a fake in tests.
pub trait Publisher {
    fn publish(&self, reading: &Reading) -> Result<()>;
}

/// Publishes readings as json POSTs via a blocking http client.
pub struct HttpPublisher {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpPublisher {
    pub fn new(url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl Publisher for HttpPublisher {
    fn publish(&self, reading: &Reading) -> Result<()> {
        // .json() sets Content-Type: application/json
        let resp = self
            .client
            .post(&self.url)
            .json(reading)
            .send()
            .with_context(|| format!("POST {}", self.url))?;

        let status = resp.status();
        let body = resp.text().unwrap_or_default();

        if status != StatusCode::OK {
            return Err(anyhow!("{} - {}", status.as_u16(), body));
        }

        tracing::info!("post response({}): {}", status.as_u16(), body);
        Ok(())
    }
}
