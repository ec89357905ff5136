// ABOUTME: Configuration validation for the guestbook server.
// ABOUTME: Turns the parsed flags into a bind address, body cap, and store file path.

use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use guestbook_store::GuestBook;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 2001;
pub const DEFAULT_MAX_ENTRY_BYTES: usize = 1024;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("host is not a valid IP address: {0}")]
    InvalidBind(String),

    #[error("max entry bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("guestbook file {0} is a directory")]
    FileIsDirectory(PathBuf),
}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct GuestbookConfig {
    pub file: PathBuf,
    pub bind: SocketAddr,
    pub max_entry_bytes: usize,
}

impl GuestbookConfig {
    /// Validate raw settings. `host` must be a literal IPv4 or IPv6 address.
    pub fn new(
        file: PathBuf,
        host: &str,
        port: u16,
        max_entry_bytes: usize,
    ) -> Result<Self, ConfigError> {
        let ip: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidBind(host.to_string()))?;

        if max_entry_bytes == 0 {
            return Err(ConfigError::ZeroBodyLimit);
        }

        if file.is_dir() {
            return Err(ConfigError::FileIsDirectory(file));
        }

        Ok(Self {
            file,
            bind: SocketAddr::new(ip, port),
            max_entry_bytes,
        })
    }

    /// Build the store, creating the file's parent directories if needed.
    /// The file itself is created by the first signature.
    pub fn open_guestbook(&self) -> std::io::Result<GuestBook> {
        if let Some(parent) = self.file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(GuestBook::new(self.file.clone()))
    }
}
