//! Input validation utilities
//!
//! Command arguments end up on a CRLF-delimited control line, so line
//! breaks and NUL bytes are refused before sending.

use crate::error::{FtpError, Result};

/// Validate that an argument can be sent on a single command line
pub fn is_valid_argument(input: &str) -> bool {
    !input.contains('\0') && !input.contains('\r') && !input.contains('\n')
}

/// Fail with `InvalidArgument` naming `what` if `input` is not sendable
pub fn ensure_valid_argument(what: &str, input: &str) -> Result<()> {
    if is_valid_argument(input) {
        Ok(())
    } else {
        Err(FtpError::InvalidArgument(format!(
            "{what} contains a line break or NUL byte"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_arguments() {
        assert!(is_valid_argument("/pub/some file.txt"));
        assert!(is_valid_argument(""));
        assert!(!is_valid_argument("a\r\nDELE b"));
        assert!(!is_valid_argument("a\nb"));
        assert!(!is_valid_argument("a\0b"));
    }
}
