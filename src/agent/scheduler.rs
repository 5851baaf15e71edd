// src/agent/scheduler.rs

//! The single-owner poll loop.

use std::thread;
use std::time::SystemTime;

use log::{error, info};

use crate::agent::config::AgentConfig;
use crate::agent::sink::{MeasurementSink, Sample};
use crate::sensor::Mhz19;
use crate::transport::{Delay, Transport};

/// Single-owner polling agent: the sensor handle, the sink, and the config
/// in one place.
///
/// Owning the only `Mhz19` value is what upholds the transport's
/// exclusivity invariant: ticks are strictly sequential, and a new exchange
/// starts only after the previous exchange, its settle delay, and its
/// persistence attempt have all completed.
#[derive(Debug)]
pub struct Agent<T, D, S> {
    sensor: Mhz19<T, D>,
    sink: S,
    config: AgentConfig,
}

impl<T, D, S> Agent<T, D, S>
where
    T: Transport,
    D: Delay,
    S: MeasurementSink,
{
    pub fn new(sensor: Mhz19<T, D>, sink: S, config: AgentConfig) -> Self {
        Agent {
            sensor,
            sink,
            config,
        }
    }

    /// Runs one tick: poll, log, forward to the sink.
    ///
    /// Sensor and sink failures are logged and swallowed; the next tick
    /// proceeds unchanged. Returns the sample on success so callers can
    /// observe what was forwarded.
    pub fn poll_once(&mut self) -> Option<Sample> {
        let concentration = match self.sensor.read_concentration() {
            Ok(concentration) => concentration,
            Err(e) => {
                error!("poll failed: {}", e);
                return None;
            }
        };

        let sample = Sample::now(concentration);
        info!(
            "CO2 concentration: {} at {}",
            concentration,
            clock_label(sample.taken_at, self.config.utc_offset_secs)
        );

        if let Err(e) = self.sink.record(&sample) {
            error!("failed to record sample: {:?}", e);
        }
        Some(sample)
    }

    /// Polls forever at the configured interval. The sleep starts after a
    /// tick fully completes, so the interval is a floor on the period.
    pub fn run(mut self) -> ! {
        info!(
            "polling every {:?} into {}/{}",
            self.config.poll_interval, self.config.org, self.config.bucket
        );
        loop {
            self.poll_once();
            thread::sleep(self.config.poll_interval);
        }
    }

    /// Releases the sensor, the sink, and the config.
    pub fn into_parts(self) -> (Mhz19<T, D>, S, AgentConfig) {
        (self.sensor, self.sink, self.config)
    }
}

/// `hh:mm:ss` label for an instant shifted by the configured UTC offset.
/// Rendering only; the instant itself is never adjusted.
fn clock_label(taken_at: SystemTime, utc_offset_secs: i32) -> String {
    let epoch_secs = taken_at
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0);
    let local = epoch_secs + i64::from(utc_offset_secs);
    let second_of_day = local.rem_euclid(86_400);
    format!(
        "{:02}:{:02}:{:02}",
        second_of_day / 3600,
        (second_of_day % 3600) / 60,
        second_of_day % 60
    )
}
