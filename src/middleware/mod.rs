//! Client middleware
//!
//! Observers notified of control channel traffic.

pub mod logging;

use std::sync::Arc;

use crate::protocol::Reply;

pub use logging::LogObserver;

/// Receives every command line sent and every reply read on the control
/// channel. Calls are synchronous and their outcome is ignored.
pub trait FtpObserver: Send + Sync {
    /// `line` is the raw command line, CRLF included
    fn on_command(&self, line: &str);

    fn on_reply(&self, reply: &Reply);
}

/// Observer shared between the caller and the connection
pub type SharedObserver = Arc<dyn FtpObserver>;
