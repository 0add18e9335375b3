//! Transfer operations
//!
//! `TYPE`, `PASV` and the transfer verb, followed by the byte stream on the
//! data connection. The data connection is released before any of these
//! methods return.

use log::{debug, info, warn};
use std::io::{Read, Write};
use std::path::Path;

use crate::client::ControlConnection;
use crate::error::Result;
use crate::protocol::Command;
use crate::protocol::responses::{
    ENTERING_PASSIVE, FILE_ACTION_OK, FILE_STATUS_OK, OK, TRANSFER_COMPLETE,
};
use crate::transfer::file_ops::{copy_chunks, create_local_file, open_local_file};
use crate::transfer::{DataConnection, TransferMode, parse_pasv_reply};
use crate::transport::Connector;
use crate::utils::validation::ensure_valid_argument;

impl<C: Connector> ControlConnection<C> {
    /// `PASV` and connect to the advertised endpoint.
    ///
    /// `None` when the server refuses, the reply cannot be parsed or the
    /// endpoint cannot be reached. Never retried.
    pub(crate) fn open_passive(&mut self) -> Result<Option<DataConnection<C::Transport>>> {
        let reply = self.execute(&Command::PASV)?;
        if !reply.is(ENTERING_PASSIVE) {
            warn!("PASV rejected: {}", reply.message.trim_end());
            return Ok(None);
        }

        let Some(endpoint) = parse_pasv_reply(&reply.message) else {
            warn!("Malformed PASV reply: {}", reply.message.trim_end());
            return Ok(None);
        };

        match self
            .connector
            .open(&endpoint.host, endpoint.port, self.config.timeout())
        {
            Ok(transport) => Ok(Some(DataConnection::new(transport, endpoint))),
            Err(e) => {
                warn!("Failed to open data connection to {endpoint}: {e}");
                Ok(None)
            }
        }
    }

    /// `NLST` of `directory`, split into names.
    ///
    /// An empty listing gives an empty vector.
    pub fn get_list(&mut self, directory: &str) -> Result<Option<Vec<String>>> {
        ensure_valid_argument("directory", directory)?;

        let Some(mut data) = self.open_passive()? else {
            return Ok(None);
        };
        if !self.execute_expect(Command::NLST(directory.to_string()), FILE_STATUS_OK)? {
            return Ok(None);
        }

        let mut raw = Vec::new();
        data.read_to_end(&mut raw)?;
        drop(data);

        if !self.confirm_completion()? {
            return Ok(None);
        }

        let names = split_listing(&String::from_utf8_lossy(&raw));
        info!("Listed {} entries in '{directory}'", names.len());
        Ok(Some(names))
    }

    /// `RETR` of `remote_path` into `local_path`.
    ///
    /// The local file is created before anything is sent and is left in
    /// place if a later step fails. The completion reply is always read;
    /// its code decides the result only when completion checking is enabled.
    pub fn download(
        &mut self,
        remote_path: &str,
        local_path: impl AsRef<Path>,
        mode: TransferMode,
    ) -> Result<bool> {
        let local_path = local_path.as_ref();
        ensure_valid_argument("remote path", remote_path)?;
        let mut file = create_local_file(local_path)?;

        if !self.execute_expect(Command::TYPE(mode), OK)? {
            return Ok(false);
        }
        let Some(mut data) = self.open_passive()? else {
            return Ok(false);
        };
        if !self.execute_expect(Command::RETR(remote_path.to_string()), FILE_STATUS_OK)? {
            return Ok(false);
        }

        let bytes = copy_chunks(&mut data, &mut file, self.config.buffer_size)?;
        drop(data);

        info!(
            "Downloaded {remote_path} -> {} ({bytes} bytes)",
            local_path.display()
        );
        self.confirm_completion()
    }

    /// `STOR` of `local_path` as `remote_path`.
    ///
    /// The data connection is closed once the local file is exhausted,
    /// which marks the end of the upload for the server.
    pub fn upload(
        &mut self,
        local_path: impl AsRef<Path>,
        remote_path: &str,
        mode: TransferMode,
    ) -> Result<bool> {
        let local_path = local_path.as_ref();
        ensure_valid_argument("remote path", remote_path)?;
        let mut file = open_local_file(local_path)?;

        if !self.execute_expect(Command::TYPE(mode), OK)? {
            return Ok(false);
        }
        let Some(mut data) = self.open_passive()? else {
            return Ok(false);
        };
        if !self.execute_expect(Command::STOR(remote_path.to_string()), FILE_STATUS_OK)? {
            return Ok(false);
        }

        let bytes = copy_chunks(&mut file, &mut data, self.config.buffer_size)?;
        data.flush()?;
        drop(data);

        info!(
            "Uploaded {} -> {remote_path} ({bytes} bytes)",
            local_path.display()
        );
        self.confirm_completion()
    }

    /// Read the reply that follows the data transfer so the next command
    /// sees its own reply. Its code only counts with `verify_completion`
    /// set, which requires `226` or `250`.
    fn confirm_completion(&mut self) -> Result<bool> {
        let reply = self.read_reply()?;
        if !self.config.verify_completion {
            debug!("Transfer finished with {}", reply.code);
            return Ok(true);
        }

        if reply.is(TRANSFER_COMPLETE) || reply.is(FILE_ACTION_OK) {
            return Ok(true);
        }
        warn!("Transfer not confirmed: {}", reply.message.trim_end());
        Ok(false)
    }
}

/// Trim the raw listing and split it on runs of CR/LF
pub(crate) fn split_listing(raw: &str) -> Vec<String> {
    raw.trim()
        .split(['\r', '\n'])
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
