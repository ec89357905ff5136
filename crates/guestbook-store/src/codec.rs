// ABOUTME: Line codec for the guestbook file: one signature per base64 line.
// ABOUTME: Encoding keeps raw newlines out of the file so each entry stays on one line.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::StoreError;

/// Encode a signature as a single line (without the trailing newline).
/// The standard base64 alphabet never produces `\n` or `\r`.
pub fn encode_line(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode one stored line back into the signature text.
/// `line_no` is 1-based and only used to label errors.
pub fn decode_line(line_no: usize, line: impl AsRef<[u8]>) -> Result<String, StoreError> {
    let bytes = STANDARD
        .decode(line)
        .map_err(|source| StoreError::Decode { line: line_no, source })?;
    String::from_utf8(bytes).map_err(|source| StoreError::Utf8 { line: line_no, source })
}
