//! RAX FTP Client - Entry Point
//!
//! Runs a single FTP operation against a server:
//!
//! ```text
//! rax-ftp-client [--config <file>] <host> <port> <user> <pass> <command> [args...]
//! ```

use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use rax_ftp_client::error::handlers::{error_to_exit_code, handle_error};
use rax_ftp_client::utils::logging::setup_logging;
use rax_ftp_client::{
    ClientConfig, ControlConnection, LogObserver, Result, TcpConnector, TransferMode,
};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "RAX FTP Client - run one operation against an FTP server")]
struct Cli {
    /// Server host name or address
    host: String,

    /// Control connection port
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Login name
    user: String,

    /// Login password
    password: String,

    /// Configuration file (extension optional, file optional)
    #[arg(long, default_value = "rax-ftp-client")]
    config: String,

    #[command(subcommand)]
    command: FtpCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum FtpCommand {
    /// Print the current remote directory
    Pwd,
    /// List names in a remote directory
    Ls { dir: Option<String> },
    /// Change the remote directory
    Cd { dir: String },
    /// Create a remote directory
    Mkdir { dir: String },
    /// Remove a remote directory
    Rmdir { dir: String },
    /// Remove a remote file
    Rm { path: String },
    /// Rename a remote file or directory
    Mv { old: String, new: String },
    /// Change permissions of a remote file (SITE CHMOD)
    Chmod {
        #[arg(value_parser = parse_octal_mode)]
        mode: u32,
        path: String,
    },
    /// Download a remote file
    Get {
        remote: String,
        local: PathBuf,
        #[arg(value_parser = parse_transfer_mode, default_value = "binary")]
        mode: TransferMode,
    },
    /// Upload a local file
    Put {
        local: PathBuf,
        remote: String,
        #[arg(value_parser = parse_transfer_mode, default_value = "binary")]
        mode: TransferMode,
    },
}

fn parse_octal_mode(s: &str) -> std::result::Result<u32, String> {
    u32::from_str_radix(s, 8).map_err(|_| format!("invalid octal mode: {s}"))
}

fn parse_transfer_mode(s: &str) -> std::result::Result<TransferMode, String> {
    s.parse().map_err(|e: rax_ftp_client::FtpError| e.to_string())
}

fn main() {
    setup_logging();
    let cli = Cli::parse();

    let config = match ClientConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            process::exit(2);
        }
    };

    match run(cli, config) {
        Ok(true) => {}
        Ok(false) => {
            error!("Server rejected the request");
            process::exit(1);
        }
        Err(e) => {
            handle_error(&e);
            process::exit(error_to_exit_code(&e));
        }
    }
}

fn run(cli: Cli, config: ClientConfig) -> Result<bool> {
    let mut conn = ControlConnection::connect_with(
        TcpConnector,
        &cli.host,
        cli.port,
        config,
        Some(Arc::new(LogObserver)),
    )?;

    if !conn.login(&cli.user, &cli.password)? {
        error!("Login rejected for {}", cli.user);
        conn.disconnect()?;
        return Ok(false);
    }

    let outcome = run_command(&mut conn, cli.command);
    conn.disconnect()?;
    outcome
}

fn run_command(conn: &mut ControlConnection, command: FtpCommand) -> Result<bool> {
    match command {
        FtpCommand::Pwd => Ok(match conn.get_current_directory()? {
            Some(path) => {
                println!("{path}");
                true
            }
            None => false,
        }),
        FtpCommand::Ls { dir } => Ok(match conn.get_list(dir.as_deref().unwrap_or(""))? {
            Some(names) => {
                for name in names {
                    println!("{name}");
                }
                true
            }
            None => false,
        }),
        FtpCommand::Cd { dir } => conn.change_directory(&dir),
        FtpCommand::Mkdir { dir } => conn.create_directory(&dir),
        FtpCommand::Rmdir { dir } => conn.remove_directory(&dir),
        FtpCommand::Rm { path } => conn.remove_file(&path),
        FtpCommand::Mv { old, new } => conn.rename(&old, &new),
        FtpCommand::Chmod { mode, path } => conn.set_permission(&path, mode),
        FtpCommand::Get {
            remote,
            local,
            mode,
        } => {
            let done = conn.download(&remote, &local, mode)?;
            if done {
                info!("Saved {remote} to {}", local.display());
            }
            Ok(done)
        }
        FtpCommand::Put {
            local,
            remote,
            mode,
        } => {
            let done = conn.upload(&local, &remote, mode)?;
            if done {
                info!("Stored {} as {remote}", local.display());
            }
            Ok(done)
        }
    }
}
