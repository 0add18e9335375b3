//! Module `commands`
//!
//! Defines the FTP commands the client sends on the control channel and
//! their wire representation.

use std::fmt;

use crate::transfer::TransferMode;

/// An FTP command issued by the client.
///
/// Commands that require arguments store them as `String` variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    USER(String), // Username for login
    PASS(String), // Password for login
    QUIT,
    PWD,
    CWD(String), // Change working directory
    RMD(String), // Remove directory
    MKD(String), // Make directory
    RNFR(String), // Rename from
    RNTO(String), // Rename to
    DELE(String), // Delete file
    CHMOD(u32, String), // SITE CHMOD <octal-mode> <path>
    PASV,
    TYPE(TransferMode),
    NLST(String), // Name list of a directory
    RETR(String), // Retrieve/download file
    STOR(String), // Store/upload file
}

impl Command {
    /// The command verb as sent on the wire
    pub fn verb(&self) -> &'static str {
        match self {
            Command::USER(_) => "USER",
            Command::PASS(_) => "PASS",
            Command::QUIT => "QUIT",
            Command::PWD => "PWD",
            Command::CWD(_) => "CWD",
            Command::RMD(_) => "RMD",
            Command::MKD(_) => "MKD",
            Command::RNFR(_) => "RNFR",
            Command::RNTO(_) => "RNTO",
            Command::DELE(_) => "DELE",
            Command::CHMOD(_, _) => "SITE CHMOD",
            Command::PASV => "PASV",
            Command::TYPE(_) => "TYPE",
            Command::NLST(_) => "NLST",
            Command::RETR(_) => "RETR",
            Command::STOR(_) => "STOR",
        }
    }

    fn argument(&self) -> Option<String> {
        match self {
            Command::USER(arg)
            | Command::PASS(arg)
            | Command::CWD(arg)
            | Command::RMD(arg)
            | Command::MKD(arg)
            | Command::RNFR(arg)
            | Command::RNTO(arg)
            | Command::DELE(arg)
            | Command::NLST(arg)
            | Command::RETR(arg)
            | Command::STOR(arg) => Some(arg.clone()),
            Command::CHMOD(mode, path) => Some(format!("{:o} {}", mode, path)),
            Command::TYPE(mode) => Some(mode.type_code().to_string()),
            Command::QUIT | Command::PWD | Command::PASV => None,
        }
    }

    /// Full command line including the CRLF terminator.
    ///
    /// An empty argument is omitted together with its separating space.
    pub fn to_line(&self) -> String {
        match self.argument() {
            Some(arg) if !arg.is_empty() => format!("{} {}\r\n", self.verb(), arg),
            _ => format!("{}\r\n", self.verb()),
        }
    }
}

/// Log-safe rendering: the password of `PASS` is masked.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PASS(_) => write!(f, "PASS ****"),
            _ => write!(f, "{}", self.to_line().trim_end()),
        }
    }
}
