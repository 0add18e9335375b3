//! Module `state`
//!
//! Lifecycle of a control connection.

/// Where a control connection is in its lifecycle.
///
/// `Authenticated` is advisory: commands are not refused before login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connected,
    Authenticated,
    Disconnected,
}
