//! Error handling
//!
//! Defines the error type returned by the FTP client for setup, argument,
//! and transport failures. Protocol rejections are not errors.

pub mod handlers;
pub mod types;

pub use types::*;
