//! Configuration management for RAX FTP Client
//!
//! Values come from an optional TOML file with environment overrides
//! (`RAX_FTP_CLIENT_TIMEOUT_SECS=30`, ...). Missing keys fall back to
//! defaults.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::protocol::ReplyPolicy;
use crate::transfer::ConnectMode;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "RAX_FTP_CLIENT";

/// Client configuration, fixed for the lifetime of a connection
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Read/write timeout for control and data connections
    /// Environment: RAX_FTP_CLIENT_TIMEOUT_SECS
    pub timeout_secs: u64,

    /// Data connection mode; only `passive` is supported
    pub data_mode: ConnectMode,

    /// Chunk size for file transfers
    pub buffer_size: usize,

    /// How multi-line replies are read
    pub reply_policy: ReplyPolicy,

    /// Require 226/250 in the reply that follows each transfer
    pub verify_completion: bool,

    /// Upper bound on lines in a single reply
    pub max_reply_lines: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 90,
            data_mode: ConnectMode::Passive,
            buffer_size: 8192,
            reply_policy: ReplyPolicy::Multiline,
            verify_completion: false,
            max_reply_lines: 128,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `path` (extension optional, file optional)
    /// with environment overrides
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.buffer_size == 0 {
            return Err(config::ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            ));
        }

        if self.max_reply_lines == 0 {
            return Err(config::ConfigError::Message(
                "max_reply_lines must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get the timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(90));
        assert_eq!(config.data_mode, ConnectMode::Passive);
        assert_eq!(config.reply_policy, ReplyPolicy::Multiline);
        assert!(!config.verify_completion);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            buffer_size: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("rax-ftp-client-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("client.toml");
        fs::write(
            &path,
            "timeout_secs = 15\nreply_policy = \"drain\"\nverify_completion = true\n",
        )
        .unwrap();

        let config = ClientConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.reply_policy, ReplyPolicy::Drain);
        assert!(config.verify_completion);
        assert_eq!(config.buffer_size, 8192);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = std::env::temp_dir().join(format!("rax-ftp-client-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("invalid.toml");
        fs::write(&path, "buffer_size = 0\n").unwrap();

        assert!(ClientConfig::load(path.to_str().unwrap()).is_err());
    }
}
