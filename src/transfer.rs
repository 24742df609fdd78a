//! Packetized transfer of a finished command stream.
//!
//! The printer consumes the stream as a plain byte position, not as
//! messages, so packets must reach the device exactly in production order.
//! A job is all-or-nothing: a rejected write aborts the remaining packets
//! and the whole buffer is re-sent on retry, because the protocol has no
//! per-packet acknowledgement to resume from.

use std::sync::mpsc;

use crate::error::Error;

/// Packet size used when the transport cannot report one.
pub const DEFAULT_PACKET_SIZE: usize = 64;

/// Filler byte for the tail of the final packet.
const PACKET_FILL: u8 = 0x20;

/// Write seam to the external USB stack.
///
/// The packetizer needs exactly two things from a device: a packet-sized
/// write primitive and the endpoint's maximum packet size. Everything else
/// about the hardware stays behind this trait.
pub trait Transport {
    /// Reported maximum packet size, `None` when the transport cannot
    /// report one. A reported zero is surfaced as an error by [`send`],
    /// never silently defaulted.
    fn max_packet_size(&self) -> Option<usize>;

    /// Writes one packet. Must accept the whole packet or fail.
    fn write_packet(&mut self, packet: &[u8]) -> Result<(), Error>;
}

/// Terminal event of a print job, delivered exactly once per job.
#[derive(Debug)]
pub enum JobOutcome {
    /// Every packet was accepted by the transport.
    Printed { packets: usize },
    /// The write of packet `packet` was rejected; later packets were not
    /// attempted.
    Failed { packet: usize, source: Error },
}

/// Receiving side of a job's single-shot completion channel.
#[derive(Debug)]
pub struct JobTicket {
    rx: mpsc::Receiver<JobOutcome>,
}

impl JobTicket {
    /// Waits for the job's completion event and folds it into a `Result`,
    /// mapping a failed job to [`Error::Transfer`] with the packet index.
    pub fn wait(self) -> Result<usize, Error> {
        match self.outcome()? {
            JobOutcome::Printed { packets } => Ok(packets),
            JobOutcome::Failed { packet, source } => Err(Error::Transfer {
                packet,
                source: Box::new(source),
            }),
        }
    }

    /// Waits for the raw completion event.
    pub fn outcome(self) -> Result<JobOutcome, Error> {
        self.rx.recv().map_err(|_| Error::ChannelClosed)
    }
}

/// Iterator of fixed-size packets over a finished buffer.
pub struct Packets<'a> {
    chunks: std::slice::Chunks<'a, u8>,
    size: usize,
}

impl Iterator for Packets<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let mut packet = self.chunks.next()?.to_vec();
        packet.resize(self.size, PACKET_FILL);
        Some(packet)
    }
}

/// Splits `data` into `ceil(len / size)` packets of exactly `size` bytes,
/// space-padding the final one.
pub fn packets(data: &[u8], size: usize) -> Result<Packets<'_>, Error> {
    if size == 0 {
        return Err(Error::InvalidPacketSize(0));
    }
    Ok(Packets {
        chunks: data.chunks(size),
        size,
    })
}

/// Streams a finished buffer through the transport in strict packet order.
///
/// The returned ticket carries the job's one completion event: `Printed`
/// once the last packet has been accepted, or `Failed` naming the packet
/// whose write was rejected. Retrying a failed job means calling `send`
/// again with the full buffer.
pub fn send<T: Transport>(transport: &mut T, data: &[u8]) -> Result<JobTicket, Error> {
    let size = transport
        .max_packet_size()
        .unwrap_or(DEFAULT_PACKET_SIZE);
    let stream = packets(data, size)?;
    let total = data.len().div_ceil(size);
    let (tx, rx) = mpsc::channel();

    log::debug!("job: {} bytes as {} packets of {}", data.len(), total, size);

    for (index, packet) in stream.enumerate() {
        if let Err(source) = transport.write_packet(&packet) {
            log::warn!("job aborted at packet {} of {}: {}", index + 1, total, source);
            let _ = tx.send(JobOutcome::Failed {
                packet: index,
                source,
            });
            return Ok(JobTicket { rx });
        }
    }

    let _ = tx.send(JobOutcome::Printed { packets: total });
    Ok(JobTicket { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeTransport {
        packet_size: Option<usize>,
        written: Vec<Vec<u8>>,
        fail_at: Option<usize>,
    }

    impl FakeTransport {
        fn new(packet_size: Option<usize>) -> Self {
            FakeTransport {
                packet_size,
                written: Vec::new(),
                fail_at: None,
            }
        }
    }

    impl Transport for FakeTransport {
        fn max_packet_size(&self) -> Option<usize> {
            self.packet_size
        }

        fn write_packet(&mut self, packet: &[u8]) -> Result<(), Error> {
            if self.fail_at == Some(self.written.len()) {
                return Err(Error::Timeout);
            }
            self.written.push(packet.to_vec());
            Ok(())
        }
    }

    #[test]
    fn splits_and_pads_to_packet_size() {
        let data: Vec<u8> = (0..130).map(|i| i as u8).collect();
        let all: Vec<Vec<u8>> = packets(&data, 64).unwrap().collect();

        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|p| p.len() == 64));
        assert_eq!(all[0].as_slice(), &data[..64]);
        assert_eq!(all[1].as_slice(), &data[64..128]);
        assert_eq!(&all[2][..2], &data[128..]);
        assert!(all[2][2..].iter().all(|&b| b == 0x20));
    }

    #[test]
    fn concatenated_packets_reproduce_the_buffer() {
        let data: Vec<u8> = (0..997).map(|i| (i % 251) as u8).collect();
        for size in [1, 7, 64, 512, 1024] {
            let all: Vec<Vec<u8>> = packets(&data, size).unwrap().collect();
            assert_eq!(all.len(), data.len().div_ceil(size));

            let mut rejoined: Vec<u8> = all.concat();
            rejoined.truncate(data.len());
            assert_eq!(rejoined, data);
        }
    }

    #[test]
    fn exact_multiple_needs_no_padding() {
        let data = [0xabu8; 128];
        let all: Vec<Vec<u8>> = packets(&data, 64).unwrap().collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all.concat(), data);
    }

    #[test]
    fn zero_packet_size_is_an_error() {
        assert!(matches!(
            packets(&[1, 2, 3], 0),
            Err(Error::InvalidPacketSize(0))
        ));

        let mut transport = FakeTransport::new(Some(0));
        assert!(matches!(
            send(&mut transport, &[1, 2, 3]),
            Err(Error::InvalidPacketSize(0))
        ));
        assert!(transport.written.is_empty());
    }

    #[test]
    fn send_reports_completion_after_last_packet() {
        let data = [0x42u8; 130];
        let mut transport = FakeTransport::new(Some(64));

        let ticket = send(&mut transport, &data).unwrap();
        assert_eq!(transport.written.len(), 3);
        assert_eq!(ticket.wait().unwrap(), 3);
    }

    #[test]
    fn send_defaults_to_64_when_size_is_unknown() {
        let data = [0u8; 65];
        let mut transport = FakeTransport::new(None);

        let ticket = send(&mut transport, &data).unwrap();
        assert_eq!(transport.written.len(), 2);
        assert!(transport.written.iter().all(|p| p.len() == DEFAULT_PACKET_SIZE));
        assert_eq!(ticket.wait().unwrap(), 2);
    }

    #[test]
    fn empty_buffer_completes_with_zero_packets() {
        let mut transport = FakeTransport::new(Some(64));
        let ticket = send(&mut transport, &[]).unwrap();
        assert!(transport.written.is_empty());
        assert!(matches!(
            ticket.outcome().unwrap(),
            JobOutcome::Printed { packets: 0 }
        ));
    }

    #[test]
    fn failed_write_aborts_the_rest_and_names_the_packet() {
        let data = [0x42u8; 300];
        let mut transport = FakeTransport::new(Some(64));
        transport.fail_at = Some(2);

        let ticket = send(&mut transport, &data).unwrap();
        // packets 0 and 1 went out, 2 was rejected, 3 and 4 never attempted
        assert_eq!(transport.written.len(), 2);

        match ticket.wait() {
            Err(Error::Transfer { packet, .. }) => assert_eq!(packet, 2),
            other => panic!("expected transfer error, got {:?}", other),
        }
    }

    #[test]
    fn failure_on_first_packet() {
        let mut transport = FakeTransport::new(Some(8));
        transport.fail_at = Some(0);

        let ticket = send(&mut transport, &[1, 2, 3]).unwrap();
        assert!(transport.written.is_empty());
        assert!(matches!(
            ticket.outcome().unwrap(),
            JobOutcome::Failed { packet: 0, .. }
        ));
    }
}
