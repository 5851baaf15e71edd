// src/protocol/timing.rs

use core::time::Duration;

// Nominal values for the MH-Z19C UART link (9600 baud, 8N1). The settle
// delay is a protocol requirement of the sensor, not a tunable; the poll
// interval is the one cadence callers are expected to configure.

// === Exchange timing ===

/// Mandatory wait between writing a command and reading its response.
/// The sensor needs this long to prepare the reply; reading earlier yields
/// a short or empty frame.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

// === Polling cadence ===

/// Default interval between polls when the caller does not configure one.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

// === Byte timing at 9600 baud (8N1) ===
// 1 start bit + 8 data bits + 1 stop bit = 10 bits per byte.
// Time per byte = 10 / 9600 s = 1.0417 ms; a full frame is 9 bytes.

/// Nominal duration of a single byte on the wire.
pub const BYTE_DURATION: Duration = Duration::from_micros(1042);
/// Nominal time a full nine-byte frame occupies the wire.
pub const FRAME_DURATION: Duration = Duration::from_micros(9375);
