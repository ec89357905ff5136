// ABOUTME: Error type shared by the guestbook store and its line codec.
// ABOUTME: Separates filesystem failures from stored lines that no longer decode.

use thiserror::Error;

/// Errors that can occur while appending to or listing the guestbook file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored line is not valid base64. `line` is 1-based.
    #[error("line {line} is not valid base64: {source}")]
    Decode {
        line: usize,
        #[source]
        source: base64::DecodeError,
    },

    /// A stored line decoded to bytes that are not UTF-8 text.
    #[error("line {line} does not decode to utf-8 text: {source}")]
    Utf8 {
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl StoreError {
    /// True for failures caused by file contents rather than the filesystem.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Decode { .. } | StoreError::Utf8 { .. })
    }
}
