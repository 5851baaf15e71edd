// src/protocol/response.rs

//! Response validation and decoding.

use core::fmt;

use super::checksum::checksum;
use super::error::ExchangeError;
use super::frame::{CHECKSUM_INDEX, FRAME_LEN, READ_CONCENTRATION, START_BYTE};

/// A decoded CO2 concentration in parts per million.
///
/// Stored as f32; the decode is exact because every 16-bit magnitude is
/// representable. The codec does not clamp to the sensor's physical range;
/// frame integrity is its only concern.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Concentration(f32);

impl Concentration {
    /// Wraps a raw ppm value. No clamping or range validation.
    pub fn new(ppm: f32) -> Self {
        Self(ppm)
    }

    /// Returns the concentration as f32 ppm.
    pub fn as_ppm(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ppm", self.0)
    }
}

/// One raw nine-byte response as read from the transport.
///
/// Transient: holds the bytes of a single exchange just long enough to
/// validate and decode them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResponseFrame([u8; FRAME_LEN]);

impl ResponseFrame {
    /// Wraps a filled response buffer.
    pub fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Validates the header and checksum, then decodes bytes 2 and 3 as a
    /// big-endian concentration magnitude (`high * 256 + low`).
    ///
    /// Generic over the transport error type `E` so the result slots
    /// directly into an exchange; validation itself never produces an `E`
    /// value.
    pub fn decode<E>(&self) -> Result<Concentration, ExchangeError<E>>
    where
        E: core::fmt::Debug,
    {
        self.validate_header()?;
        self.validate_checksum()?;
        let magnitude = u16::from_be_bytes([self.0[2], self.0[3]]);
        Ok(Concentration(f32::from(magnitude)))
    }

    fn validate_header<E>(&self) -> Result<(), ExchangeError<E>>
    where
        E: core::fmt::Debug,
    {
        if self.0[0] != START_BYTE || self.0[1] != READ_CONCENTRATION {
            return Err(ExchangeError::InvalidHeader {
                start: self.0[0],
                opcode: self.0[1],
            });
        }
        Ok(())
    }

    fn validate_checksum<E>(&self) -> Result<(), ExchangeError<E>>
    where
        E: core::fmt::Debug,
    {
        let expected = self.0[CHECKSUM_INDEX];
        let calculated = checksum(&self.0[1..CHECKSUM_INDEX]);
        if expected != calculated {
            return Err(ExchangeError::ChecksumMismatch {
                expected,
                calculated,
            });
        }
        Ok(())
    }
}
