// ABOUTME: The guestbook store: one file of base64 lines guarded by one mutex.
// ABOUTME: Appends in storage order and lists newest first, re-reading the file on every call.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::codec::{decode_line, encode_line};
use crate::error::StoreError;

/// An append-only guestbook backed by a single file.
///
/// Every read and every write of the file happens while holding `lock`, so
/// concurrent appends never interleave and a listing never observes a half
/// written line. Entries are not cached; each `list` reads the file again.
#[derive(Debug)]
pub struct GuestBook {
    path: PathBuf,
    lock: Mutex<()>,
}

impl GuestBook {
    /// Create a store for the given file. The file is not touched until the
    /// first non-empty append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the path to the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // The mutex guards the file, not the unit value, so a panic in another
    // holder leaves nothing to repair.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append one signature as a base64 line. Empty text is a no-op and
    /// does not create the file.
    pub fn append(&self, text: &str) -> Result<(), StoreError> {
        if text.is_empty() {
            return Ok(());
        }

        let mut line = encode_line(text);
        line.push('\n');

        let _guard = self.guard();
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }

    /// List every signature, most recent first.
    ///
    /// A missing file lists as empty. Empty lines (including the one after
    /// the final newline) are skipped. Any line that fails to decode aborts
    /// the listing.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let raw = {
            let _guard = self.guard();
            match fs::read(&self.path) {
                Ok(raw) => raw,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(e.into()),
            }
        };

        let mut entries = Vec::new();
        for (idx, line) in raw.split(|b| *b == b'\n').enumerate() {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            entries.push(decode_line(idx + 1, line)?);
        }
        entries.reverse();
        Ok(entries)
    }

    /// Number of signatures currently stored.
    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn temp_book() -> (TempDir, GuestBook) {
        let dir = TempDir::new().unwrap();
        let book = GuestBook::new(dir.path().join("guestbook.txt"));
        (dir, book)
    }

    #[test]
    fn append_then_list_round_trip() {
        let (_dir, book) = temp_book();
        book.append("hello").unwrap();

        assert_eq!(book.list().unwrap(), vec!["hello".to_string()]);
    }

    #[test]
    fn list_returns_most_recent_first() {
        let (_dir, book) = temp_book();
        book.append("a").unwrap();
        book.append("b").unwrap();
        book.append("c").unwrap();

        assert_eq!(book.list().unwrap(), vec!["c", "b", "a"]);
    }

    #[test]
    fn file_keeps_chronological_order() {
        let (_dir, book) = temp_book();
        book.append("first").unwrap();
        book.append("second").unwrap();

        let content = fs::read_to_string(book.path()).unwrap();
        let on_disk: Vec<String> = content
            .lines()
            .enumerate()
            .map(|(i, l)| decode_line(i + 1, l).unwrap())
            .collect();
        assert_eq!(on_disk, vec!["first", "second"]);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn empty_append_is_a_no_op() {
        let (_dir, book) = temp_book();
        book.append("").unwrap();
        assert!(!book.path().exists(), "empty append must not create the file");

        book.append("x").unwrap();
        book.append("").unwrap();
        assert_eq!(book.list().unwrap(), vec!["x"]);
    }

    #[test]
    fn embedded_newline_stays_one_entry() {
        let (_dir, book) = temp_book();
        book.append("line1\nline2").unwrap();

        let entries = book.list().unwrap();
        assert_eq!(entries, vec!["line1\nline2"]);
        let content = fs::read_to_string(book.path()).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn non_ascii_round_trip() {
        let (_dir, book) = temp_book();
        book.append("こんにちは, <b>&</b> ünïcödé").unwrap();

        assert_eq!(book.list().unwrap(), vec!["こんにちは, <b>&</b> ünïcödé"]);
    }

    #[test]
    fn missing_file_lists_as_empty() {
        let (_dir, book) = temp_book();
        assert!(!book.path().exists());

        assert!(book.list().unwrap().is_empty());
        assert_eq!(book.count().unwrap(), 0);
    }

    #[test]
    fn empty_file_lists_as_empty() {
        let (_dir, book) = temp_book();
        fs::write(book.path(), "").unwrap();

        assert!(book.list().unwrap().is_empty());
    }

    #[test]
    fn trailing_and_blank_lines_are_skipped() {
        let (_dir, book) = temp_book();
        let content = format!("{}\n\n{}\r\n\n", encode_line("one"), encode_line("two"));
        fs::write(book.path(), content).unwrap();

        assert_eq!(book.list().unwrap(), vec!["two", "one"]);
    }

    #[test]
    fn malformed_line_aborts_listing() {
        let (_dir, book) = temp_book();
        book.append("good").unwrap();
        let mut file = OpenOptions::new().append(true).open(book.path()).unwrap();
        writeln!(file, "@@not-base64@@").unwrap();
        drop(file);
        book.append("also good").unwrap();

        let err = book.list().unwrap_err();
        assert!(matches!(err, StoreError::Decode { line: 2, .. }), "got {err:?}");
    }

    #[test]
    fn undecodable_text_aborts_listing() {
        let (_dir, book) = temp_book();
        fs::write(book.path(), "//4=\n").unwrap();

        let err = book.list().unwrap_err();
        assert!(matches!(err, StoreError::Utf8 { line: 1, .. }));
    }

    #[test]
    fn append_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let book = GuestBook::new(dir.path().join("no-such-dir").join("guestbook.txt"));

        let err = book.append("hi").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(!err.is_corrupt());
    }

    #[test]
    fn list_on_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let book = GuestBook::new(dir.path());

        assert!(matches!(book.list().unwrap_err(), StoreError::Io(_)));
    }

    #[test]
    fn consecutive_lists_are_identical() {
        let (_dir, book) = temp_book();
        book.append("a").unwrap();
        book.append("b").unwrap();

        assert_eq!(book.list().unwrap(), book.list().unwrap());
    }

    #[test]
    fn reopening_sees_previous_entries() {
        let (dir, book) = temp_book();
        book.append("before restart").unwrap();
        drop(book);

        let book = GuestBook::new(dir.path().join("guestbook.txt"));
        book.append("after restart").unwrap();
        assert_eq!(book.list().unwrap(), vec!["after restart", "before restart"]);
    }

    #[test]
    fn concurrent_appends_are_all_kept_once() {
        let (_dir, book) = temp_book();
        const WRITERS: usize = 32;

        std::thread::scope(|s| {
            for i in 0..WRITERS {
                let book = &book;
                s.spawn(move || {
                    book.append(&format!("signature {i}\nfrom thread {i}")).unwrap();
                });
            }
        });

        let entries = book.list().unwrap();
        assert_eq!(entries.len(), WRITERS);
        let unique: HashSet<&String> = entries.iter().collect();
        assert_eq!(unique.len(), WRITERS);
        for i in 0..WRITERS {
            assert!(unique.contains(&format!("signature {i}\nfrom thread {i}")));
        }

        let content = fs::read_to_string(book.path()).unwrap();
        assert_eq!(content.lines().count(), WRITERS);
    }

    #[test]
    fn concurrent_reads_and_writes_never_see_torn_lines() {
        let (_dir, book) = temp_book();

        std::thread::scope(|s| {
            for i in 0..8 {
                let book = &book;
                s.spawn(move || {
                    for j in 0..10 {
                        book.append(&format!("{i}-{j}")).unwrap();
                    }
                });
            }
            for _ in 0..4 {
                let book = &book;
                s.spawn(move || {
                    for _ in 0..10 {
                        book.list().unwrap();
                    }
                });
            }
        });

        assert_eq!(book.count().unwrap(), 80);
    }
}
