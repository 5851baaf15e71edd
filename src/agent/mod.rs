// src/agent/mod.rs

//! Host-side polling agent: configuration, the measurement sink seam, and
//! the single-owner scheduler that ticks a [`crate::sensor::Mhz19`] forever.
//!
//! Everything here assumes `std` (threads, wall clock); the protocol and
//! sensor layers underneath do not.

// --- Declare all public modules within agent ---
pub mod config;
pub mod scheduler;
pub mod sink;

// --- Re-export key types for easier access ---

// From config.rs
pub use config::AgentConfig;

// From scheduler.rs
pub use scheduler::Agent;

// From sink.rs
pub use sink::{MeasurementSink, Sample, FIELD_NAME, MEASUREMENT_NAME, SENSOR_ID};
