// src/protocol/mod.rs

//! The MH-Z19C wire protocol: frame geometry, checksum, response decoding,
//! error taxonomy, and timing constants. Everything here is pure and
//! `core`-only; I/O lives in [`crate::sensor`] and [`crate::transport`].

// --- Declare all public modules within protocol ---
pub mod checksum;
pub mod error;
pub mod frame;
pub mod response;
pub mod timing;

// --- Re-export key types/functions for easier access ---

// From checksum.rs
pub use checksum::checksum;

// From error.rs
pub use error::ExchangeError;

// From frame.rs
pub use frame::{CommandFrame, FRAME_LEN, READ_CONCENTRATION, SENSOR_ADDRESS, START_BYTE};

// From response.rs
pub use response::{Concentration, ResponseFrame};

// From timing.rs (constants - users can access via protocol::timing::*)
pub use timing::SETTLE_DELAY;
