// src/lib.rs

//! Driver and polling agent for the MH-Z19C CO2 sensor.
//!
//! The sensor speaks a fixed nine-byte UART protocol at 9600 8N1: the host
//! writes a read-concentration command, waits for the sensor to assemble its
//! reply, then reads back a nine-byte response whose payload carries the CO2
//! concentration in parts per million. [`protocol`] holds the pure wire
//! layer (frames, checksum, and decoding), [`sensor`] drives one exchange
//! over a caller-supplied [`Transport`], and [`agent`] (std only) wraps the
//! sensor in a fixed-interval polling loop that forwards samples to a
//! [`MeasurementSink`].
//!
//! The core is `no_std`; enable the `std` feature (on by default) for the
//! agent, blanket `std::io` transports, and [`ThreadDelay`].

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod protocol;
pub mod sensor;
pub mod transport;

#[cfg(feature = "std")]
pub mod agent;

// Re-export key types for convenience
pub use protocol::{CommandFrame, Concentration, ExchangeError, ResponseFrame};
pub use sensor::Mhz19;
pub use transport::{Delay, Transport};

#[cfg(feature = "std")]
pub use agent::{Agent, AgentConfig, MeasurementSink, Sample};
#[cfg(feature = "std")]
pub use transport::ThreadDelay;
