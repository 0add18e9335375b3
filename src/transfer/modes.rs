//! FTP Transfer modes
//!
//! Data connection modes and transfer types.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::FtpError;

/// How the data connection is established. Only passive mode is
/// implemented; active mode is rejected at connect time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectMode {
    Active,
    #[default]
    Passive,
}

impl fmt::Display for ConnectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectMode::Active => write!(f, "active"),
            ConnectMode::Passive => write!(f, "passive"),
        }
    }
}

impl FromStr for ConnectMode {
    type Err = FtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(ConnectMode::Active),
            "passive" => Ok(ConnectMode::Passive),
            _ => Err(FtpError::InvalidArgument(format!(
                "unknown connection mode: {s}"
            ))),
        }
    }
}

/// Representation type selected before each transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Ascii,
    Binary,
}

impl TransferMode {
    /// Code sent with `TYPE`
    pub fn type_code(self) -> char {
        match self {
            TransferMode::Ascii => 'A',
            TransferMode::Binary => 'I',
        }
    }
}

impl FromStr for TransferMode {
    type Err = FtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" | "a" => Ok(TransferMode::Ascii),
            "binary" | "i" => Ok(TransferMode::Binary),
            _ => Err(FtpError::InvalidArgument(format!(
                "unknown transfer mode: {s}"
            ))),
        }
    }
}
