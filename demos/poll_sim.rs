// demos/poll_sim.rs

//! Polls a scripted in-memory sensor and prints each sample to stdout.
//!
//! The port replays a short series of canned response frames, so this runs
//! anywhere without hardware:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example poll_sim
//! ```

use std::convert::Infallible;
use std::thread;
use std::time::Duration;

use mhz19_poller::protocol::checksum::checksum;
use mhz19_poller::protocol::frame::{CHECKSUM_INDEX, FRAME_LEN, READ_CONCENTRATION, START_BYTE};
use mhz19_poller::{Agent, AgentConfig, MeasurementSink, Mhz19, Sample, ThreadDelay, Transport};

/// Replays canned response frames, one per exchange, cycling when exhausted.
struct ScriptedPort {
    responses: Vec<[u8; FRAME_LEN]>,
    next: usize,
}

impl ScriptedPort {
    fn with_readings(ppms: &[u16]) -> Self {
        ScriptedPort {
            responses: ppms.iter().map(|&ppm| frame_for(ppm)).collect(),
            next: 0,
        }
    }
}

impl Transport for ScriptedPort {
    type Error = Infallible;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let frame = self.responses[self.next % self.responses.len()];
        self.next += 1;
        let n = frame.len().min(buf.len());
        buf[..n].copy_from_slice(&frame[..n]);
        Ok(n)
    }
}

/// Builds a well-formed response frame carrying the given concentration.
fn frame_for(ppm: u16) -> [u8; FRAME_LEN] {
    let [high, low] = ppm.to_be_bytes();
    let mut bytes = [START_BYTE, READ_CONCENTRATION, high, low, 0, 0, 0, 0, 0];
    bytes[CHECKSUM_INDEX] = checksum(&bytes[1..CHECKSUM_INDEX]);
    bytes
}

/// Prints each sample instead of writing it anywhere durable.
struct StdoutSink;

impl MeasurementSink for StdoutSink {
    type Error = Infallible;

    fn record(&mut self, sample: &Sample) -> Result<(), Self::Error> {
        println!("{}: {}", sample.sensor, sample.concentration);
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let port = ScriptedPort::with_readings(&[412, 418, 425]);
    let sensor = Mhz19::new(port, ThreadDelay);

    let interval = Duration::from_secs(1);
    let config = AgentConfig::new().poll_interval(interval);
    let mut agent = Agent::new(sensor, StdoutSink, config);

    // Three ticks instead of `Agent::run`, which polls forever.
    for _ in 0..3 {
        agent.poll_once();
        thread::sleep(interval);
    }
}
