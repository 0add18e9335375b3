//! Error handlers
//!
//! Helpers for reporting client errors.

use log::error;

use crate::error::types::FtpError;

/// Log an FTP client error
pub fn handle_error(err: &FtpError) {
    error!("FTP client error: {}", err);
}

/// Process exit code for an error, used by the command-line client
pub fn error_to_exit_code(err: &FtpError) -> i32 {
    match err {
        FtpError::InvalidArgument(_) | FtpError::UnsupportedMode(_) => 2,
        FtpError::LocalIo { .. } => 3,
        FtpError::Connect { .. } | FtpError::Greeting(_) => 4,
        FtpError::ConnectionClosed
        | FtpError::TooManyLines(_)
        | FtpError::NotConnected
        | FtpError::Io(_) => 5,
    }
}
