//! Line loading for word list sources.
//!
//! A [`LineLoader`] turns one path into a stream of lines. It draws the line
//! between the two failure modes every caller relies on:
//!
//! - `Ok(None)`: the path does not exist. Callers skip the source.
//! - `Err(SysdictError::SourceUnreadable { .. })`: the path exists but cannot
//!   be opened, or a read fails part way. Callers abort.
//!
//! Lines are yielded with their terminator (`\n`, or `\r\n`) removed. A line
//! that is not valid UTF-8 makes the source unreadable, with an
//! [`io::ErrorKind::InvalidData`] cause, just like [`BufRead::lines`].

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, SysdictError};

/// A stream of lines from one source.
pub type Lines = Box<dyn Iterator<Item = Result<String>>>;

/// Trait for opening word list sources.
pub trait LineLoader {
    /// Open `path` and stream its lines, or return `Ok(None)` when it does not exist.
    fn load(&self, path: &Path) -> Result<Option<Lines>>;
}

impl<L: LineLoader + ?Sized> LineLoader for &L {
    fn load(&self, path: &Path) -> Result<Option<Lines>> {
        (**self).load(path)
    }
}

/// Line iterator over any buffered reader.
struct ReaderLines<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> ReaderLines<R> {
    fn new(reader: R, path: &Path) -> Self {
        ReaderLines {
            reader,
            path: path.to_path_buf(),
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ReaderLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                match String::from_utf8(std::mem::take(&mut self.buf)) {
                    Ok(line) => Some(Ok(line)),
                    Err(e) => {
                        self.done = true;
                        let cause = io::Error::new(io::ErrorKind::InvalidData, e);
                        Some(Err(SysdictError::unreadable(&self.path, cause)))
                    }
                }
            }
            Err(e) => {
                self.done = true;
                Some(Err(SysdictError::unreadable(&self.path, e)))
            }
        }
    }
}

/// Whether an error from inspecting a path means "there is nothing there".
fn is_missing(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Loads word lists from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineLoader;

impl FsLineLoader {
    /// Create a new filesystem loader.
    pub fn new() -> Self {
        FsLineLoader
    }
}

impl LineLoader for FsLineLoader {
    fn load(&self, path: &Path) -> Result<Option<Lines>> {
        if let Err(e) = fs::metadata(path) {
            if is_missing(&e) {
                return Ok(None);
            }
            return Err(SysdictError::unreadable(path, e));
        }

        let file = File::open(path).map_err(|e| SysdictError::unreadable(path, e))?;
        let lines: Lines = Box::new(ReaderLines::new(BufReader::new(file), path));
        Ok(Some(lines))
    }
}

#[derive(Debug, Clone)]
enum MemoryEntry {
    Contents(Box<[u8]>),
    Unreadable(io::ErrorKind),
    FailsAfter(Box<[u8]>, io::ErrorKind),
}

/// A reader that always fails, appended to content to simulate a broken read.
struct FailingReader(io::ErrorKind);

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "simulated read failure"))
    }
}

/// An in-memory loader for tests and for embedding word lists in a binary.
///
/// Paths that were never registered are reported as missing.
#[derive(Debug, Clone, Default)]
pub struct MemoryLineLoader {
    entries: HashMap<PathBuf, MemoryEntry>,
}

impl MemoryLineLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register raw file content under `path`.
    pub fn add_text<P: Into<PathBuf>>(&mut self, path: P, text: &str) -> &mut Self {
        self.add_bytes(path, text.as_bytes())
    }

    /// Register file content that need not be valid UTF-8.
    pub fn add_bytes<P: Into<PathBuf>>(&mut self, path: P, data: &[u8]) -> &mut Self {
        self.entries
            .insert(path.into(), MemoryEntry::Contents(data.to_vec().into_boxed_slice()));
        self
    }

    /// Register a word list, one word per line.
    pub fn add_words<P, I, S>(&mut self, path: P, words: I) -> &mut Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for word in words {
            text.push_str(word.as_ref());
            text.push('\n');
        }
        self.add_text(path, &text)
    }

    /// Register `path` as existing but impossible to open.
    pub fn add_unreadable<P: Into<PathBuf>>(&mut self, path: P, kind: io::ErrorKind) -> &mut Self {
        self.entries.insert(path.into(), MemoryEntry::Unreadable(kind));
        self
    }

    /// Register `path` as yielding `text` and then failing mid-read.
    pub fn add_failing_after<P: Into<PathBuf>>(
        &mut self,
        path: P,
        text: &str,
        kind: io::ErrorKind,
    ) -> &mut Self {
        self.entries.insert(
            path.into(),
            MemoryEntry::FailsAfter(text.as_bytes().to_vec().into_boxed_slice(), kind),
        );
        self
    }

    /// Number of registered paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LineLoader for MemoryLineLoader {
    fn load(&self, path: &Path) -> Result<Option<Lines>> {
        let lines: Lines = match self.entries.get(path) {
            None => return Ok(None),
            Some(MemoryEntry::Unreadable(kind)) => {
                return Err(SysdictError::unreadable(
                    path,
                    io::Error::new(*kind, "simulated open failure"),
                ));
            }
            Some(MemoryEntry::Contents(data)) => {
                Box::new(ReaderLines::new(Cursor::new(data.clone()), path))
            }
            Some(MemoryEntry::FailsAfter(data, kind)) => {
                let reader = BufReader::new(Cursor::new(data.clone()).chain(FailingReader(*kind)));
                Box::new(ReaderLines::new(reader, path))
            }
        };
        Ok(Some(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(lines: Lines) -> Vec<String> {
        lines.map(|line| line.unwrap()).collect()
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FsLineLoader::new().load(&dir.path().join("nope")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_parent_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("words");
        fs::write(&file, "a\n").unwrap();

        // A regular file used as a directory component.
        let result = FsLineLoader::new().load(&file.join("nested")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_line_terminators_are_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words");
        fs::write(&path, "alpha\r\nbeta\n\ngamma").unwrap();

        let lines = collect(FsLineLoader::new().load(&path).unwrap().unwrap());
        assert_eq!(lines, vec!["alpha", "beta", "", "gamma"]);
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        fs::write(&path, "").unwrap();

        let lines = collect(FsLineLoader::new().load(&path).unwrap().unwrap());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1");
        fs::write(&path, b"ok\ncaf\xe9\nlater\n").unwrap();

        let lines: Vec<Result<String>> = FsLineLoader::new().load(&path).unwrap().unwrap().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_ref().unwrap(), "ok");
        match &lines[1] {
            Err(SysdictError::SourceUnreadable { path: failed, source }) => {
                assert_eq!(failed, &path);
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("Expected unreadable source, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let result = FsLineLoader::new()
            .load(dir.path())
            .and_then(|lines| lines.into_iter().flatten().collect::<Result<Vec<_>>>());

        match result {
            Err(SysdictError::SourceUnreadable { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("Expected unreadable source, got {other:?}"),
        }
    }

    #[test]
    fn test_memory_loader() {
        let mut loader = MemoryLineLoader::new();
        loader
            .add_words("/words", ["one", "two"])
            .add_text("/crlf", "x\r\ny\r\n")
            .add_unreadable("/locked", io::ErrorKind::PermissionDenied);

        assert_eq!(loader.len(), 3);
        assert_eq!(
            collect(loader.load(Path::new("/words")).unwrap().unwrap()),
            vec!["one", "two"]
        );
        assert_eq!(
            collect(loader.load(Path::new("/crlf")).unwrap().unwrap()),
            vec!["x", "y"]
        );
        assert!(loader.load(Path::new("/absent")).unwrap().is_none());
        assert!(matches!(
            loader.load(Path::new("/locked")),
            Err(SysdictError::SourceUnreadable { .. })
        ));
    }

    #[test]
    fn test_memory_loader_mid_read_failure() {
        let mut loader = MemoryLineLoader::new();
        loader.add_failing_after("/flaky", "first\nsecond\n", io::ErrorKind::UnexpectedEof);

        let lines: Vec<Result<String>> = loader.load(Path::new("/flaky")).unwrap().unwrap().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_ref().unwrap(), "first");
        assert_eq!(lines[1].as_ref().unwrap(), "second");
        assert!(matches!(lines[2], Err(SysdictError::SourceUnreadable { .. })));
    }
}
