//! Transport layer
//!
//! Byte-stream connections used for the control and data channels. The
//! protocol code only talks to these traits, so it runs the same against
//! real sockets and in-memory fakes.

use std::io::{self, Read, Write};
use std::time::Duration;

pub mod tcp;

#[cfg(test)]
pub(crate) mod memory;

pub use tcp::{TcpConnector, TcpTransport};

/// A blocking, timeout-bounded byte stream.
pub trait FtpTransport: Read + Write {
    /// Append bytes up to and including the next `\n` to `buf`.
    ///
    /// Returns the number of bytes appended; 0 means end of stream.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;

    /// Whether unread bytes are available without blocking
    fn has_pending_data(&mut self) -> io::Result<bool>;

    fn set_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()>;

    fn close(&mut self) -> io::Result<()>;
}

/// Opens transports for both control and data connections.
pub trait Connector {
    type Transport: FtpTransport;

    /// Open a blocking transport to `host:port` with read and write
    /// timeouts set to `timeout`.
    fn open(&mut self, host: &str, port: u16, timeout: Duration) -> io::Result<Self::Transport>;
}
