//! Best-effort UDP telemetry emitter
//!
//! One JSON datagram per cycle to a fixed peer, fire-and-forget. A failed
//! send is logged at WARN and dropped - no retry, no queueing, no
//! backpressure; the next cycle proceeds independently. Telemetry loss is
//! expected under link churn.

use crate::error::Result;
use crate::types::TelemetryRecord;
use std::net::{SocketAddr, UdpSocket};

/// UDP emitter bound to an ephemeral local port
pub struct UdpEmitter {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpEmitter {
    /// Create an emitter for the given peer.
    ///
    /// Binds to 0.0.0.0:0 - the emitter only sends, never receives. The
    /// socket is non-blocking; an unsendable datagram is dropped rather
    /// than stalling the sampling cadence.
    pub fn new(peer: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_nonblocking(true)?;
        log::info!("Streaming telemetry to {}", peer);
        Ok(UdpEmitter { socket, peer })
    }

    /// Send one record as a single datagram, best-effort.
    pub fn send(&self, record: &TelemetryRecord) {
        let payload = match serde_json::to_vec(record) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Failed to serialize telemetry record: {}", e);
                return;
            }
        };

        match self.socket.send_to(&payload, self.peer) {
            Ok(_) => log::trace!("Sent {} byte record to {}", payload.len(), self.peer),
            Err(e) => log::warn!("Dropped telemetry datagram to {}: {}", self.peer, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector3;
    use std::time::Duration;

    #[test]
    fn test_send_reaches_loopback_receiver() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let peer = receiver.local_addr().unwrap();

        let emitter = UdpEmitter::new(peer).unwrap();
        let record = TelemetryRecord::package(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(0.0, 0.0, 3.0),
        );
        emitter.send(&record);

        let mut buf = [0u8; 1024];
        let (n, _) = receiver.recv_from(&mut buf).unwrap();
        let parsed: TelemetryRecord = serde_json::from_slice(&buf[..n]).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_send_failure_is_swallowed() {
        // Port 0 as a destination is unroutable; send must not panic or
        // report the failure upward.
        let peer: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let emitter = UdpEmitter {
            socket: UdpSocket::bind("127.0.0.1:0").unwrap(),
            peer,
        };
        emitter.send(&TelemetryRecord::package(
            Vector3::zero(),
            Vector3::zero(),
            Vector3::zero(),
        ));
    }
}
