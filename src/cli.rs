// ABOUTME: Command-line interface for the guestbook binary.
// ABOUTME: Every flag can also come from a GUESTBOOK_* environment variable.

use std::path::PathBuf;

use clap::Parser;
use guestbook_server::config::{DEFAULT_HOST, DEFAULT_MAX_ENTRY_BYTES, DEFAULT_PORT};
use guestbook_server::{ConfigError, GuestbookConfig};

#[derive(Debug, Parser)]
#[command(
    name = "guestbook",
    about = "Serve a guestbook backed by a single append-only file",
    version
)]
pub struct Cli {
    /// The port to listen on
    #[arg(short, long, env = "GUESTBOOK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The IP address to bind
    #[arg(long, env = "GUESTBOOK_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Largest signature accepted, in bytes of request body
    #[arg(long, env = "GUESTBOOK_MAX_ENTRY_BYTES", default_value_t = DEFAULT_MAX_ENTRY_BYTES)]
    pub max_entry_bytes: usize,

    /// File holding the signatures, one base64 line each
    #[arg(env = "GUESTBOOK_FILE")]
    pub file: PathBuf,
}

impl Cli {
    pub fn into_config(self) -> Result<GuestbookConfig, ConfigError> {
        GuestbookConfig::new(self.file, &self.host, self.port, self.max_entry_bytes)
    }
}
