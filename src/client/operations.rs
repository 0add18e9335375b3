//! Client operations
//!
//! Single round-trip commands: login, directory handling, rename, delete
//! and permissions. A rejected command yields `false` (or `None`), not an
//! error.

use log::info;

use crate::client::{ControlConnection, SessionState};
use crate::error::{FtpError, Result};
use crate::protocol::Command;
use crate::protocol::responses::{
    FILE_ACTION_OK, FILE_ACTION_PENDING, LOGIN_SUCCESS, OK, PASSWORD_REQUIRED, PATHNAME_CREATED,
};
use crate::transport::Connector;
use crate::utils::validation::ensure_valid_argument;

/// Highest permission value accepted by `set_permission`
pub const MAX_PERMISSION_MODE: u32 = 0o777;

impl<C: Connector> ControlConnection<C> {
    /// `USER` then `PASS`. Returns `false` as soon as the server rejects
    /// either step.
    pub fn login(&mut self, username: &str, password: &str) -> Result<bool> {
        ensure_valid_argument("username", username)?;
        ensure_valid_argument("password", password)?;

        if !self.execute_expect(Command::USER(username.to_string()), PASSWORD_REQUIRED)? {
            return Ok(false);
        }
        if !self.execute_expect(Command::PASS(password.to_string()), LOGIN_SUCCESS)? {
            return Ok(false);
        }

        self.state = SessionState::Authenticated;
        info!("Logged in as {username}");
        Ok(true)
    }

    /// `PWD`. The path is whatever lies between the first and the last
    /// double quote of the reply; no further validation is done.
    pub fn get_current_directory(&mut self) -> Result<Option<String>> {
        let reply = self.execute(&Command::PWD)?;
        if !reply.is(PATHNAME_CREATED) {
            return Ok(None);
        }
        Ok(Some(quoted_path(&reply.message).to_string()))
    }

    pub fn change_directory(&mut self, path: &str) -> Result<bool> {
        ensure_valid_argument("path", path)?;
        self.execute_expect(Command::CWD(path.to_string()), FILE_ACTION_OK)
    }

    pub fn remove_directory(&mut self, path: &str) -> Result<bool> {
        ensure_valid_argument("path", path)?;
        self.execute_expect(Command::RMD(path.to_string()), FILE_ACTION_OK)
    }

    pub fn create_directory(&mut self, path: &str) -> Result<bool> {
        ensure_valid_argument("path", path)?;
        self.execute_expect(Command::MKD(path.to_string()), PATHNAME_CREATED)
    }

    /// `RNFR` then `RNTO`. A failing second step is not rolled back.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<bool> {
        ensure_valid_argument("old name", old_name)?;
        ensure_valid_argument("new name", new_name)?;

        if !self.execute_expect(Command::RNFR(old_name.to_string()), FILE_ACTION_PENDING)? {
            return Ok(false);
        }
        self.execute_expect(Command::RNTO(new_name.to_string()), FILE_ACTION_OK)
    }

    pub fn remove_file(&mut self, path: &str) -> Result<bool> {
        ensure_valid_argument("path", path)?;
        self.execute_expect(Command::DELE(path.to_string()), FILE_ACTION_OK)
    }

    /// `SITE CHMOD`. `mode` must be within `0..=0o777`; it is checked
    /// before anything is sent.
    pub fn set_permission(&mut self, path: &str, mode: u32) -> Result<bool> {
        if mode > MAX_PERMISSION_MODE {
            return Err(FtpError::InvalidArgument(format!(
                "permission mode {mode:o} exceeds {MAX_PERMISSION_MODE:o}"
            )));
        }
        ensure_valid_argument("path", path)?;
        self.execute_expect(Command::CHMOD(mode, path.to_string()), OK)
    }
}

fn quoted_path(message: &str) -> &str {
    match (message.find('"'), message.rfind('"')) {
        (Some(start), Some(end)) if end > start => &message[start + 1..end],
        _ => "",
    }
}
