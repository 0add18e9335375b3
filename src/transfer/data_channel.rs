//! Module `data_channel`
//!
//! Scoped ownership of a passive data connection. The transport is closed
//! when the guard goes out of scope, whichever way the transfer ends.

use log::{debug, warn};
use std::io::{self, Read, Write};

use crate::transfer::PassiveEndpoint;
use crate::transport::FtpTransport;

/// A data connection opened for a single transfer
pub struct DataConnection<T: FtpTransport> {
    transport: T,
    endpoint: PassiveEndpoint,
}

impl<T: FtpTransport> DataConnection<T> {
    pub fn new(transport: T, endpoint: PassiveEndpoint) -> Self {
        debug!("Data connection opened to {endpoint}");
        Self {
            transport,
            endpoint,
        }
    }
}

impl<T: FtpTransport> Read for DataConnection<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.transport.read(buf)
    }
}

impl<T: FtpTransport> Write for DataConnection<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.transport.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.transport.flush()
    }
}

impl<T: FtpTransport> Drop for DataConnection<T> {
    fn drop(&mut self) {
        if let Err(e) = self.transport.close() {
            warn!("Failed to close data connection to {}: {}", self.endpoint, e);
        }
        debug!("Data connection to {} released", self.endpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::MemoryTransport;

    #[test]
    fn test_closed_on_drop() {
        let (transport, handle) = MemoryTransport::new(["listing"]);
        let endpoint = PassiveEndpoint {
            host: "127.0.0.1".into(),
            port: 2000,
        };
        {
            let mut data = DataConnection::new(transport, endpoint);
            let mut buf = String::new();
            data.read_to_string(&mut buf).unwrap();
            assert_eq!(buf, "listing");
            assert!(!handle.is_closed());
        }
        assert!(handle.is_closed());
    }
}
