// src/protocol/error.rs

/// Classified failure of a single request/response exchange.
///
/// Generic over the transport's error type `E`, which only needs `Debug`
/// for diagnostics; pure validation code instantiates it as `()`. Every
/// variant is non-fatal to the process: the scheduler logs the error and
/// polls again on the next tick. Nothing here retries.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying transport write reported an error.
    #[error("transport write failed: {0:?}")]
    WriteFailure(E),

    /// Transport accepted fewer than the full nine command bytes.
    /// Partial writes are not retried within an exchange.
    #[error("short write: transport accepted {written} of 9 bytes")]
    ShortWrite { written: usize },

    /// Underlying transport read reported an error.
    #[error("transport read failed: {0:?}")]
    ReadFailure(E),

    /// Fewer than nine response bytes were available when a full frame was
    /// expected, even though the read itself succeeded.
    #[error("short response: {read} of 9 bytes available")]
    ShortResponse { read: usize },

    /// Start marker or opcode mismatch in the response header. Points to
    /// framing desync, a non-sensor device on the line, or noise.
    #[error("invalid response header: start {start:#04x}, opcode {opcode:#04x}")]
    InvalidHeader { start: u8, opcode: u8 },

    /// The checksum byte observed on the wire does not match the one
    /// recomputed over response bytes 1..=7.
    #[error("checksum mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },
}

// No From<E> blanket: both write and read carry the transport error, so call
// sites classify explicitly via map_err.
