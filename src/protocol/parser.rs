//! FTP reply parsing
//!
//! Reads one logical reply from the control transport.

use serde::Deserialize;

use crate::error::{FtpError, Result};
use crate::protocol::Reply;
use crate::transport::FtpTransport;

/// How multi-line replies are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyPolicy {
    /// RFC 959 continuation: `ddd-` lines run until a `ddd ` line.
    #[default]
    Multiline,
    /// Keep reading lines while the transport already holds unread bytes.
    /// Earlier lines are discarded; only the last one is kept.
    Drain,
}

/// Read the next reply from `transport`.
///
/// In both policies the returned message is the final physical line.
/// At most `max_lines` lines are consumed for a single reply.
pub fn read_reply<T>(transport: &mut T, policy: ReplyPolicy, max_lines: usize) -> Result<Reply>
where
    T: FtpTransport + ?Sized,
{
    let line = match policy {
        ReplyPolicy::Multiline => read_multiline(transport, max_lines)?,
        ReplyPolicy::Drain => read_drain(transport, max_lines)?,
    };
    Ok(Reply::from_line(line))
}

fn next_line<T: FtpTransport + ?Sized>(transport: &mut T) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    match transport.read_line(&mut buf)? {
        0 => Err(FtpError::ConnectionClosed),
        _ => Ok(String::from_utf8_lossy(&buf).into_owned()),
    }
}

fn read_drain<T: FtpTransport + ?Sized>(transport: &mut T, max_lines: usize) -> Result<String> {
    let mut line = next_line(transport)?;
    let mut count = 1;
    while transport.has_pending_data()? {
        if count >= max_lines {
            return Err(FtpError::TooManyLines(max_lines));
        }
        line = next_line(transport)?;
        count += 1;
    }
    Ok(line)
}

fn read_multiline<T: FtpTransport + ?Sized>(transport: &mut T, max_lines: usize) -> Result<String> {
    let first = next_line(transport)?;
    let prefix = match continuation_prefix(&first) {
        Some(prefix) => prefix,
        None => return Ok(first),
    };

    for _ in 1..max_lines {
        let line = next_line(transport)?;
        let bytes = line.trim_start().as_bytes();
        if bytes.starts_with(&prefix) && bytes.get(3) != Some(&b'-') {
            return Ok(line);
        }
    }
    Err(FtpError::TooManyLines(max_lines))
}

/// The code of a `ddd-` opening line, if it is one
fn continuation_prefix(line: &str) -> Option<[u8; 3]> {
    let bytes = line.trim_start().as_bytes();
    if bytes.len() < 4 || bytes[3] != b'-' || !bytes[..3].iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some([bytes[0], bytes[1], bytes[2]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::MemoryTransport;

    #[test]
    fn test_single_line_reply() {
        let (mut t, _) = MemoryTransport::new(["220 Service ready\r\n"]);
        let reply = read_reply(&mut t, ReplyPolicy::Multiline, 16).unwrap();
        assert_eq!(reply.code, 220);
        assert_eq!(reply.message, "220 Service ready\r\n");
    }

    #[test]
    fn test_multiline_reply_across_bursts() {
        let (mut t, _) =
            MemoryTransport::new(["230-Welcome\r\n", " some banner\r\n230-more\r\n230 Done\r\n"]);
        let reply = read_reply(&mut t, ReplyPolicy::Multiline, 16).unwrap();
        assert_eq!(reply.code, 230);
        assert_eq!(reply.message, "230 Done\r\n");
    }

    #[test]
    fn test_multiline_indented_closing_line() {
        let (mut t, _) = MemoryTransport::new(["230-Welcome\r\n", "  230 Done\r\n"]);
        let reply = read_reply(&mut t, ReplyPolicy::Multiline, 16).unwrap();
        assert_eq!(reply.code, 230);
        assert_eq!(reply.message, "  230 Done\r\n");
    }

    #[test]
    fn test_multiline_leaves_next_reply_unread() {
        let (mut t, _) = MemoryTransport::new(["211-Features\r\n211 End\r\n331 Password\r\n"]);
        let first = read_reply(&mut t, ReplyPolicy::Multiline, 16).unwrap();
        let second = read_reply(&mut t, ReplyPolicy::Multiline, 16).unwrap();
        assert_eq!(first.message, "211 End\r\n");
        assert_eq!(second.code, 331);
    }

    #[test]
    fn test_drain_keeps_last_buffered_line() {
        let (mut t, _) = MemoryTransport::new(["220-hello\r\n220 ready\r\n", "331 next\r\n"]);
        let first = read_reply(&mut t, ReplyPolicy::Drain, 16).unwrap();
        assert_eq!(first.message, "220 ready\r\n");
        let second = read_reply(&mut t, ReplyPolicy::Drain, 16).unwrap();
        assert_eq!(second.code, 331);
    }

    #[test]
    fn test_drain_stops_at_burst_boundary() {
        // continuation lines arriving later are not waited for
        let (mut t, _) = MemoryTransport::new(["220-hello\r\n", "220 ready\r\n"]);
        let reply = read_reply(&mut t, ReplyPolicy::Drain, 16).unwrap();
        assert_eq!(reply.message, "220-hello\r\n");
        assert_eq!(reply.code, 220);
    }

    #[test]
    fn test_closed_connection() {
        let (mut t, _) = MemoryTransport::new(Vec::<&str>::new());
        assert!(matches!(
            read_reply(&mut t, ReplyPolicy::Multiline, 16),
            Err(FtpError::ConnectionClosed)
        ));
    }

    #[test]
    fn test_line_limit() {
        let (mut t, _) = MemoryTransport::new(["150-a\r\n150-b\r\n150-c\r\n150 d\r\n"]);
        assert!(matches!(
            read_reply(&mut t, ReplyPolicy::Multiline, 3),
            Err(FtpError::TooManyLines(3))
        ));
    }

    #[test]
    fn test_uncoded_line() {
        let (mut t, _) = MemoryTransport::new(["hello there\r\n"]);
        let reply = read_reply(&mut t, ReplyPolicy::Multiline, 16).unwrap();
        assert_eq!(reply.code, 0);
    }
}
