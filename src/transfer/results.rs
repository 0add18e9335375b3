//! Transfer result types
//!
//! Defines values produced while negotiating data connections.

use std::fmt;

/// Endpoint advertised by the server in a `227` reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassiveEndpoint {
    pub host: String,
    pub port: u16,
}

impl fmt::Display for PassiveEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
