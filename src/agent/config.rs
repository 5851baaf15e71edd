// src/agent/config.rs

use std::time::Duration;

use crate::protocol::timing::DEFAULT_POLL_INTERVAL;

/// Immutable run configuration for the polling agent.
///
/// Collected once at startup and passed in whole; nothing reads ad-hoc
/// state after construction. How the values are obtained (environment,
/// flags, or a file) is the caller's concern, not the library's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Destination organization for persisted samples.
    pub org: String,
    /// Destination bucket for persisted samples.
    pub bucket: String,
    /// Pause between poll ticks, measured from the end of one tick to the
    /// start of the next.
    pub poll_interval: Duration,
    /// UTC offset applied when rendering wall-clock times in log output.
    /// Persisted timestamps stay absolute.
    pub utc_offset_secs: i32,
}

impl AgentConfig {
    /// Creates a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination organization.
    pub fn org(mut self, org: impl Into<String>) -> Self {
        self.org = org.into();
        self
    }

    /// Sets the destination bucket.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Sets the pause between polls.
    ///
    /// A zero interval would spin the loop against the sensor, so it is
    /// ignored in favor of the default.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        if interval.is_zero() {
            log::warn!(
                "ignoring zero poll interval, keeping {:?}",
                DEFAULT_POLL_INTERVAL
            );
            self.poll_interval = DEFAULT_POLL_INTERVAL;
        } else {
            self.poll_interval = interval;
        }
        self
    }

    /// Sets the UTC offset used for wall-clock log annotations.
    pub fn utc_offset_secs(mut self, secs: i32) -> Self {
        self.utc_offset_secs = secs;
        self
    }
}

impl Default for AgentConfig {
    /// Returns the default configuration: organization `home`, bucket
    /// `sensor-home`, one poll per minute, UTC wall clock.
    fn default() -> Self {
        AgentConfig {
            org: String::from("home"),
            bucket: String::from("sensor-home"),
            poll_interval: DEFAULT_POLL_INTERVAL,
            utc_offset_secs: 0,
        }
    }
}
