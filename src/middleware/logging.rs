//! Logging middleware
//!
//! Forwards control channel traffic to the `log` facade.

use log::debug;

use crate::middleware::FtpObserver;
use crate::protocol::Reply;

/// Logs commands and replies at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl FtpObserver for LogObserver {
    fn on_command(&self, line: &str) {
        debug!("> {}", mask_command_line(line));
    }

    fn on_reply(&self, reply: &Reply) {
        debug!("< [{}] {}", reply.code, reply.message.trim_end());
    }
}

/// Strip the terminator and hide the argument of `PASS`
pub fn mask_command_line(line: &str) -> &str {
    let line = line.trim_end();
    match line.get(..5) {
        Some(verb) if verb.eq_ignore_ascii_case("PASS ") => "PASS ****",
        _ => line,
    }
}
