//! Module `session`
//!
//! Owns the control transport and runs the one-command-one-reply cycle.
//! Every outgoing line and every reply is reported to the registered
//! observer.

use log::{debug, error, info, warn};
use std::io::Write;

use crate::client::SessionState;
use crate::config::ClientConfig;
use crate::error::{FtpError, Result};
use crate::middleware::SharedObserver;
use crate::protocol::responses::READY;
use crate::protocol::{Command, Reply, read_reply};
use crate::transfer::ConnectMode;
use crate::transport::{Connector, FtpTransport, TcpConnector};

/// An FTP session over a control connection.
///
/// Calls are strictly sequential: every method blocks until its reply (or
/// transfer) is complete or the configured timeout expires.
pub struct ControlConnection<C: Connector = TcpConnector> {
    pub(crate) connector: C,
    pub(crate) transport: Option<C::Transport>,
    pub(crate) config: ClientConfig,
    pub(crate) observer: Option<SharedObserver>,
    pub(crate) state: SessionState,
    endpoint: String,
}

impl ControlConnection<TcpConnector> {
    /// Connect over TCP with the default configuration.
    pub fn connect(host: &str, port: u16, mode: ConnectMode) -> Result<Self> {
        let config = ClientConfig {
            data_mode: mode,
            ..ClientConfig::default()
        };
        Self::connect_with(TcpConnector, host, port, config, None)
    }
}

impl<C: Connector> ControlConnection<C> {
    /// Open the control connection and wait for the `220` greeting.
    ///
    /// The observer, if any, already sees the greeting.
    pub fn connect_with(
        mut connector: C,
        host: &str,
        port: u16,
        config: ClientConfig,
        observer: Option<SharedObserver>,
    ) -> Result<Self> {
        let endpoint = format!("{host}:{port}");
        info!("Connecting to {endpoint}");

        let mut transport = connector
            .open(host, port, config.timeout())
            .map_err(|source| {
                error!("Failed to open control connection to {endpoint}: {source}");
                FtpError::Connect {
                    host: host.to_string(),
                    port,
                    source,
                }
            })?;

        if config.data_mode != ConnectMode::Passive {
            error!("Rejecting {} data connection mode", config.data_mode);
            let _ = transport.close();
            return Err(FtpError::UnsupportedMode(config.data_mode));
        }

        let mut conn = ControlConnection {
            connector,
            transport: Some(transport),
            config,
            observer,
            state: SessionState::Connected,
            endpoint,
        };

        let greeting = conn.read_reply()?;
        if !greeting.is(READY) {
            error!(
                "Unexpected greeting from {}: {}",
                conn.endpoint,
                greeting.message.trim_end()
            );
            conn.release();
            return Err(FtpError::Greeting(greeting));
        }

        info!("Connected to {}", conn.endpoint);
        Ok(conn)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace (or remove) the observer notified of commands and replies
    pub fn set_observer(&mut self, observer: Option<SharedObserver>) {
        self.observer = observer;
    }

    /// Send `QUIT` and release the control transport.
    ///
    /// The reply code is not checked, and a server that hangs up without
    /// replying counts as a clean disconnect. A second call fails with
    /// `NotConnected`.
    pub fn disconnect(&mut self) -> Result<()> {
        let result = self.execute(&Command::QUIT);
        if self.transport.is_some() {
            self.release();
        }
        match result {
            Ok(reply) => {
                debug!("QUIT answered with {}", reply.code);
                Ok(())
            }
            Err(FtpError::ConnectionClosed) => {
                debug!("QUIT answered by closing the connection");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub(crate) fn send_command(&mut self, command: &Command) -> Result<()> {
        let transport = self.transport.as_mut().ok_or(FtpError::NotConnected)?;
        let line = command.to_line();

        if let Err(e) = transport
            .write_all(line.as_bytes())
            .and_then(|_| transport.flush())
        {
            error!("Failed to send {} to {}: {}", command.verb(), self.endpoint, e);
            return Err(e.into());
        }

        if let Some(observer) = &self.observer {
            observer.on_command(&line);
        }
        Ok(())
    }

    pub(crate) fn read_reply(&mut self) -> Result<Reply> {
        let transport = self.transport.as_mut().ok_or(FtpError::NotConnected)?;

        let reply = match read_reply(
            transport,
            self.config.reply_policy,
            self.config.max_reply_lines,
        ) {
            Ok(reply) => reply,
            Err(FtpError::ConnectionClosed) => {
                warn!("Control connection to {} closed by server", self.endpoint);
                self.release();
                return Err(FtpError::ConnectionClosed);
            }
            Err(e) => return Err(e),
        };

        if let Some(observer) = &self.observer {
            observer.on_reply(&reply);
        }
        Ok(reply)
    }

    /// One command, one reply
    pub(crate) fn execute(&mut self, command: &Command) -> Result<Reply> {
        self.send_command(command)?;
        self.read_reply()
    }

    /// Run `command` and report whether the reply carried `expected`.
    pub(crate) fn execute_expect(&mut self, command: Command, expected: u16) -> Result<bool> {
        let reply = self.execute(&command)?;
        if reply.is(expected) {
            return Ok(true);
        }
        warn!(
            "{} rejected by {}: {}",
            command,
            self.endpoint,
            reply.message.trim_end()
        );
        Ok(false)
    }

    fn release(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            if let Err(e) = transport.close() {
                warn!("Failed to close control connection to {}: {}", self.endpoint, e);
            }
        }
        self.state = SessionState::Disconnected;
        info!("Disconnected from {}", self.endpoint);
    }
}
