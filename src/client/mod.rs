//! Control connection
//!
//! Session lifecycle and the single round-trip FTP commands.

pub mod operations;
pub mod session;
pub mod state;

pub use session::ControlConnection;
pub use state::SessionState;
