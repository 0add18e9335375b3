//! RAX FTP Client
//!
//! A blocking FTP client: control connection, coded replies, passive data
//! connections and the list/download/upload transfers built on them.

pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod protocol;
pub mod transfer;
pub mod transport;
pub mod utils;

pub use client::{ControlConnection, SessionState};
pub use config::ClientConfig;
pub use error::{FtpError, Result};
pub use middleware::{FtpObserver, LogObserver, SharedObserver};
pub use protocol::{Reply, ReplyPolicy};
pub use transfer::{ConnectMode, TransferMode};
pub use transport::{Connector, FtpTransport, TcpConnector, TcpTransport};
