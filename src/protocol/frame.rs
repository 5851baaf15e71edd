// src/protocol/frame.rs

//! Frame geometry and the outbound command frame.

use super::checksum::checksum;

/// Every MH-Z19C frame, command or response, is exactly nine bytes.
pub const FRAME_LEN: usize = 9;
/// Start marker carried in byte 0 of every frame.
pub const START_BYTE: u8 = 0xFF;
/// Sensor address carried in byte 1 of command frames.
pub const SENSOR_ADDRESS: u8 = 0x01;
/// Opcode requesting the current gas concentration; echoed in byte 1 of the
/// response.
pub const READ_CONCENTRATION: u8 = 0x86;
/// Index of the checksum byte. The checksummed region is `1..CHECKSUM_INDEX`.
pub const CHECKSUM_INDEX: usize = 8;

/// An immutable outbound command frame.
///
/// Built once per process and reused for every exchange; construction is a
/// pure function of protocol constants, with the checksum byte filled in at
/// build time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CommandFrame([u8; FRAME_LEN]);

impl CommandFrame {
    /// Builds the read-concentration command.
    ///
    /// Layout: start marker, sensor address, opcode `0x86`, five unused zero
    /// bytes, checksum over bytes 1..=7. No inputs, no failure modes.
    pub fn read_concentration() -> Self {
        Self::with_opcode(READ_CONCENTRATION)
    }

    fn with_opcode(opcode: u8) -> Self {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[0] = START_BYTE;
        bytes[1] = SENSOR_ADDRESS;
        bytes[2] = opcode;
        bytes[CHECKSUM_INDEX] = checksum(&bytes[1..CHECKSUM_INDEX]);
        Self(bytes)
    }

    /// Returns the raw frame bytes.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }
}
