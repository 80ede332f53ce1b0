use std::io;
use std::net::{Ipv4Addr, UdpSocket};

/// Non-blocking source of datagrams.
///
/// `poll_recv` returns `Ok(Some(len))` with one datagram copied into `buf`
/// (truncated to the buffer length), `Ok(None)` when nothing is pending, and
/// `Err` on transport failure. The receiver drains a source through this
/// seam, which also lets tests substitute a scripted source.
pub trait DatagramSource {
    fn poll_recv(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>>;
}

/// Receive-only UDP transport bound to a local port.
///
/// No remote endpoint is fixed: any sender is accepted, and stream selection
/// happens by channel tag in the receiver rather than by address. The socket
/// is the sole property of its device session and closes on drop.
pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    /// Bind to `0.0.0.0:port` in non-blocking mode. Port 0 lets the OS pick.
    pub fn bind(port: u16) -> io::Result<UdpTransport> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, port))?;
        socket.set_nonblocking(true)?;
        Ok(UdpTransport { socket })
    }

    /// The locally bound port. Useful for diagnostics and when binding
    /// with port 0.
    pub fn local_port(&self) -> io::Result<u16> {
        self.socket.local_addr().map(|addr| addr.port())
    }
}

impl DatagramSource for UdpTransport {
    fn poll_recv(&mut self, buf: &mut [u8]) -> io::Result<Option<usize>> {
        match self.socket.recv_from(buf) {
            Ok((len, _sender)) => Ok(Some(len)),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }
}
