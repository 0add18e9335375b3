//! In-memory transport for tests
//!
//! Incoming bytes are queued as segments; each segment models one burst
//! arriving from the peer, so `has_pending_data` only reports bytes left
//! in the current burst.

use std::collections::VecDeque;
use std::io::{self, BufRead, Cursor, ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::transport::{Connector, FtpTransport};

/// Observes what the client did with a `MemoryTransport`
#[derive(Clone, Default)]
pub(crate) struct MemoryHandle {
    written: Arc<Mutex<Vec<u8>>>,
    closed: Arc<AtomicBool>,
}

impl MemoryHandle {
    pub(crate) fn written(&self) -> Vec<u8> {
        self.written.lock().unwrap().clone()
    }

    pub(crate) fn written_text(&self) -> String {
        String::from_utf8_lossy(&self.written()).into_owned()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

pub(crate) struct MemoryTransport {
    segments: VecDeque<Vec<u8>>,
    current: Cursor<Vec<u8>>,
    handle: MemoryHandle,
}

impl MemoryTransport {
    pub(crate) fn new<I, S>(segments: I) -> (Self, MemoryHandle)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let handle = MemoryHandle::default();
        let transport = MemoryTransport {
            segments: segments
                .into_iter()
                .map(|s| s.as_ref().to_vec())
                .collect(),
            current: Cursor::new(Vec::new()),
            handle: handle.clone(),
        };
        (transport, handle)
    }

    fn exhausted(&self) -> bool {
        self.current.position() as usize >= self.current.get_ref().len()
    }

    /// Move to the next segment once the current one is used up
    fn refill(&mut self) -> bool {
        while self.exhausted() {
            match self.segments.pop_front() {
                Some(segment) => self.current = Cursor::new(segment),
                None => return false,
            }
        }
        true
    }
}

impl Read for MemoryTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.refill() {
            return Ok(0);
        }
        self.current.read(buf)
    }
}

impl Write for MemoryTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.handle.is_closed() {
            return Err(io::Error::new(ErrorKind::NotConnected, "transport closed"));
        }
        self.handle.written.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FtpTransport for MemoryTransport {
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let start = buf.len();
        while self.refill() {
            self.current.read_until(b'\n', buf)?;
            if buf.ends_with(b"\n") {
                break;
            }
        }
        Ok(buf.len() - start)
    }

    fn has_pending_data(&mut self) -> io::Result<bool> {
        Ok(!self.exhausted())
    }

    fn set_timeout(&mut self, _timeout: Option<Duration>) -> io::Result<()> {
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.handle.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Hands out queued transports in order: the control connection first,
/// then one per data connection.
pub(crate) struct MemoryConnector {
    transports: VecDeque<MemoryTransport>,
    opened: Arc<Mutex<Vec<(String, u16)>>>,
}

impl MemoryConnector {
    pub(crate) fn new(transports: Vec<MemoryTransport>) -> (Self, Arc<Mutex<Vec<(String, u16)>>>) {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let connector = MemoryConnector {
            transports: transports.into(),
            opened: Arc::clone(&opened),
        };
        (connector, opened)
    }
}

impl Connector for MemoryConnector {
    type Transport = MemoryTransport;

    fn open(&mut self, host: &str, port: u16, _timeout: Duration) -> io::Result<MemoryTransport> {
        let transport = self
            .transports
            .pop_front()
            .ok_or_else(|| io::Error::new(ErrorKind::ConnectionRefused, "no transport queued"))?;
        self.opened.lock().unwrap().push((host.to_string(), port));
        Ok(transport)
    }
}
