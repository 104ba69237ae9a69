//! Read-only sources for dictionary files
//!
//! The database never touches the file system directly. It asks a
//! [`WordSource`] to open paths, so dictionaries can come from a directory,
//! from memory, or from the binary itself.

use super::embedded::EMBEDDED_SOURCES;
use rustc_hash::FxHashMap;
use std::fs;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

/// An opened source: readable, with a known size
pub trait SourceFile: Read {
    /// Size in bytes
    ///
    /// # Errors
    /// Returns an I/O error if the size cannot be determined.
    fn size(&self) -> io::Result<u64>;
}

/// A read-only file system of dictionary sources
pub trait WordSource {
    /// Open the source at `path`
    ///
    /// # Errors
    /// Returns an I/O error if the path does not exist or cannot be opened.
    fn open(&self, path: &str) -> io::Result<Box<dyn SourceFile + '_>>;
}

impl SourceFile for fs::File {
    fn size(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }
}

impl SourceFile for Cursor<&[u8]> {
    fn size(&self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }
}

/// Sources below a root directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WordSource for DirSource {
    fn open(&self, path: &str) -> io::Result<Box<dyn SourceFile + '_>> {
        Ok(Box::new(fs::File::open(self.root.join(path))?))
    }
}

/// Sources held in memory, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: FxHashMap<String, Vec<u8>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl WordSource for MemorySource {
    fn open(&self, path: &str) -> io::Result<Box<dyn SourceFile + '_>> {
        self.files
            .get(path)
            .map(|data| Box::new(Cursor::new(data.as_slice())) as Box<dyn SourceFile + '_>)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such source: {path}")))
    }
}

/// Sources compiled into the binary from `configs/`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn open(&self, path: &str) -> io::Result<Box<dyn SourceFile + '_>> {
        EMBEDDED_SOURCES
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, data)| Box::new(Cursor::new(data.as_bytes())) as Box<dyn SourceFile + '_>)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no embedded source: {path}"),
                )
            })
    }
}
