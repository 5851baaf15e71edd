// src/sensor/mod.rs

//! Blocking MH-Z19C client: one owner, one exchange at a time.

use crate::protocol::{
    error::ExchangeError,
    frame::{CommandFrame, FRAME_LEN},
    response::{Concentration, ResponseFrame},
    timing,
};
use crate::transport::{Delay, Transport};

/// A synchronous MH-Z19C attached to a duplex byte stream.
///
/// Owns the transport handle and the delay provider. `exchange` takes
/// `&mut self`, so the borrow checker guarantees at most one exchange is in
/// flight per handle; the framing depends on that exclusivity. The
/// read-concentration command is built once at construction and reused for
/// every poll.
#[derive(Debug)]
pub struct Mhz19<T, D> {
    transport: T,
    delay: D,
    command: CommandFrame,
}

impl<T, D> Mhz19<T, D>
where
    T: Transport,
    D: Delay,
{
    /// Creates a client over an already-opened transport. The crate never
    /// opens or configures the device itself.
    pub fn new(transport: T, delay: D) -> Self {
        Mhz19 {
            transport,
            delay,
            command: CommandFrame::read_concentration(),
        }
    }

    /// Polls the sensor once with the cached read-concentration command.
    pub fn read_concentration(&mut self) -> Result<Concentration, ExchangeError<T::Error>> {
        let command = self.command;
        self.exchange(&command)
    }

    /// Performs one write→settle→read exchange and decodes the reply.
    ///
    /// Steps, in order: write the full nine-byte command (single write
    /// call, partial writes are not retried), wait the fixed settle delay,
    /// read the nine-byte response (single read call), validate header and
    /// checksum, decode. Every failure comes back classified; retry policy
    /// belongs to the poll loop, not here.
    pub fn exchange(
        &mut self,
        command: &CommandFrame,
    ) -> Result<Concentration, ExchangeError<T::Error>> {
        self.send_command(command)?;
        self.delay
            .delay_ms(timing::SETTLE_DELAY.as_millis() as u32);
        let response = self.read_response()?;
        response.decode()
    }

    /// Releases the transport and delay provider.
    pub fn free(self) -> (T, D) {
        (self.transport, self.delay)
    }

    fn send_command(&mut self, command: &CommandFrame) -> Result<(), ExchangeError<T::Error>> {
        let bytes = command.as_bytes();
        log::debug!("sending command {:02x?}", bytes);
        let written = self
            .transport
            .write(bytes)
            .map_err(ExchangeError::WriteFailure)?;
        if written < bytes.len() {
            return Err(ExchangeError::ShortWrite { written });
        }
        Ok(())
    }

    fn read_response(&mut self) -> Result<ResponseFrame, ExchangeError<T::Error>> {
        let mut buf = [0u8; FRAME_LEN];
        let read = self
            .transport
            .read(&mut buf)
            .map_err(ExchangeError::ReadFailure)?;
        // A read can report success and still deliver a partial frame;
        // judge the count, never the buffer length.
        if read < FRAME_LEN {
            return Err(ExchangeError::ShortResponse { read });
        }
        log::debug!("received response {:02x?}", &buf);
        Ok(ResponseFrame::from_bytes(buf))
    }
}
