// ABOUTME: Persistence layer for guestbook, owning the single signature file.
// ABOUTME: Provides the mutex-guarded append/list store and the base64 line codec.

pub mod codec;
pub mod error;
pub mod guestbook;

pub use codec::{decode_line, encode_line};
pub use error::StoreError;
pub use guestbook::GuestBook;
