//! Data sources feeding a diff session.

use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reader handed out by a [`DataSource`].
pub type SourceReader = Box<dyn Read + Send>;

/// Provider of a byte stream to compare.
///
/// Each call to [`open`](Self::open) yields an independent reader positioned
/// at the start of the data.
pub trait DataSource: fmt::Debug + Send + Sync {
    /// Opens a fresh reader over the data.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while acquiring the data.
    fn open(&self) -> io::Result<SourceReader>;

    /// Human readable description used in diagnostics.
    fn describe(&self) -> String;
}

/// In-memory data.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemorySource {
    data: Arc<[u8]>,
}

impl MemorySource {
    /// Wraps `data`.
    #[must_use]
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the wrapped bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl DataSource for MemorySource {
    fn open(&self) -> io::Result<SourceReader> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.data))))
    }

    fn describe(&self) -> String {
        format!("{} bytes in memory", self.data.len())
    }
}

/// Data read from a file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn open(&self) -> io::Result<SourceReader> {
        Ok(Box::new(File::open(&self.path)?))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
