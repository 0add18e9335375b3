//! FTP Response handling
//!
//! Defines the reply value type and the reply codes the client checks.

/// Standard FTP reply codes
pub const FILE_STATUS_OK: u16 = 150;
pub const OK: u16 = 200;
pub const READY: u16 = 220;
pub const TRANSFER_COMPLETE: u16 = 226;
pub const ENTERING_PASSIVE: u16 = 227;
pub const LOGIN_SUCCESS: u16 = 230;
pub const FILE_ACTION_OK: u16 = 250;
pub const PATHNAME_CREATED: u16 = 257;
pub const PASSWORD_REQUIRED: u16 = 331;
pub const FILE_ACTION_PENDING: u16 = 350;

/// A server reply.
///
/// `message` is the last physical line of the reply exactly as received,
/// terminator included. `code` is 0 when the line carries no numeric code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub code: u16,
    pub message: String,
}

impl Reply {
    pub fn from_line(message: String) -> Self {
        Reply {
            code: parse_code(&message),
            message,
        }
    }

    pub fn is(&self, code: u16) -> bool {
        self.code == code
    }
}

/// Parse the three-digit code at the start of a reply line.
///
/// Leading whitespace is skipped; anything other than three ASCII digits
/// yields 0.
pub fn parse_code(line: &str) -> u16 {
    let digits = match line.trim_start().as_bytes().get(..3) {
        Some(digits) => digits,
        None => return 0,
    };
    if !digits.iter().all(u8::is_ascii_digit) {
        return 0;
    }
    digits
        .iter()
        .fold(0u16, |code, d| code * 10 + u16::from(d - b'0'))
}
