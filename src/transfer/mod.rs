//! Transfer module for FTP client
//!
//! Passive data connection negotiation and the transfer engine behind
//! listing, download and upload.

pub mod data_channel;
pub mod file_ops;
pub mod modes;
pub mod operations;
pub mod passive;
pub mod results;

// Re-export key types and functions
pub use data_channel::DataConnection;
pub use modes::{ConnectMode, TransferMode};
pub use passive::parse_pasv_reply;
pub use results::PassiveEndpoint;
