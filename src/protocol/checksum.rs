// src/protocol/checksum.rs

//! Frame integrity checksum, shared by command construction and response
//! validation.

/// Calculates the integrity byte for the checksummed region of a frame.
///
/// The MH-Z19C checksums bytes 1 through 7 of every nine-byte frame: the
/// byte sum is folded modulo 256 and the checksum is `0xFF - sum + 1` in
/// the same 8-bit domain. Byte 0 (start marker) and byte 8 (the checksum
/// itself) never participate.
///
/// # Arguments
///
/// * `payload`: the checksummed region, i.e. frame bytes `1..=7`.
///
/// # Returns
///
/// The checksum byte expected at frame index 8.
#[inline]
pub fn checksum(payload: &[u8]) -> u8 {
    // Fold in u8 so the wraparound stays in the 8-bit domain; `0xFF - sum + 1`
    // is the two's-complement negation of the byte sum.
    let sum = payload.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    0xFFu8.wrapping_sub(sum).wrapping_add(1)
}
