// src/agent/sink.rs

//! The persistence seam: timestamped samples and the sink trait.

use std::fmt::Debug;
use std::time::SystemTime;

use crate::protocol::response::Concentration;

/// Tag value identifying the sensor on every persisted point.
pub const SENSOR_ID: &str = "MH-Z19C";
/// Default measurement name for time-series points built from samples.
pub const MEASUREMENT_NAME: &str = "sensor_data";
/// Default field name carrying the concentration value.
pub const FIELD_NAME: &str = "co2_concentration";

/// One timestamped reading on its way to persistence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    /// Decoded CO2 concentration.
    pub concentration: Concentration,
    /// Wall-clock instant the exchange completed. Absolute; any local-time
    /// rendering applies an offset at display time only.
    pub taken_at: SystemTime,
    /// Sensor tag, [`SENSOR_ID`] unless a caller builds the sample by hand.
    pub sensor: &'static str,
}

impl Sample {
    /// Stamps a concentration with the current wall-clock time and the
    /// standard sensor tag.
    pub fn now(concentration: Concentration) -> Self {
        Sample {
            concentration,
            taken_at: SystemTime::now(),
            sensor: SENSOR_ID,
        }
    }
}

/// Destination for samples: a time-series store client, a file, or a test
/// double.
///
/// Implementations receive the org/bucket destination out of band (from the
/// agent's config at construction time). Record failures are logged by the
/// agent and never interrupt polling.
pub trait MeasurementSink {
    /// Error reported by the underlying store.
    type Error: Debug;

    /// Records one sample.
    fn record(&mut self, sample: &Sample) -> Result<(), Self::Error>;
}
