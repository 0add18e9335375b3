//! FTP Protocol implementation
//!
//! Formats outgoing command lines and reads coded replies from the
//! control channel.

pub mod commands;
pub mod parser;
pub mod responses;

pub use commands::Command;
pub use parser::{ReplyPolicy, read_reply};
pub use responses::{Reply, parse_code};
