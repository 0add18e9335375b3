//! Error types
//!
//! Hard failures of the FTP client. A server replying with an unexpected code
//! is reported by the operation's return value, never through `FtpError`.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::protocol::Reply;
use crate::transfer::ConnectMode;

/// Errors that abort an FTP client operation
#[derive(Debug)]
pub enum FtpError {
    /// The control transport could not be opened
    Connect {
        host: String,
        port: u16,
        source: io::Error,
    },
    /// A data connection mode other than passive was requested
    UnsupportedMode(ConnectMode),
    /// The server greeting was not `220`
    Greeting(Reply),
    InvalidArgument(String),
    /// A local file could not be opened or created
    LocalIo { path: PathBuf, source: io::Error },
    /// The server closed the control connection in the middle of a reply
    ConnectionClosed,
    /// A multi-line reply exceeded the configured line limit
    TooManyLines(usize),
    /// The control connection has already been released
    NotConnected,
    Io(io::Error),
}

impl fmt::Display for FtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpError::Connect { host, port, source } => {
                write!(f, "Failed to connect to {}:{}: {}", host, port, source)
            }
            FtpError::UnsupportedMode(mode) => {
                write!(f, "Unsupported data connection mode: {}", mode)
            }
            FtpError::Greeting(reply) => write!(
                f,
                "Unexpected server greeting {}: {}",
                reply.code,
                reply.message.trim_end()
            ),
            FtpError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            FtpError::LocalIo { path, source } => {
                write!(f, "Local file error on {}: {}", path.display(), source)
            }
            FtpError::ConnectionClosed => write!(f, "Control connection closed by server"),
            FtpError::TooManyLines(max) => {
                write!(f, "Reply exceeded the limit of {} lines", max)
            }
            FtpError::NotConnected => write!(f, "Not connected"),
            FtpError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FtpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FtpError::Connect { source, .. } | FtpError::LocalIo { source, .. } => Some(source),
            FtpError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FtpError {
    fn from(error: io::Error) -> Self {
        FtpError::Io(error)
    }
}

/// Result alias used throughout the client
pub type Result<T> = std::result::Result<T, FtpError>;
