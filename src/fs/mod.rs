// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

pub mod mock;

/// Abstract filesystem interface used by the config loader.
pub trait FileSystem: Send + Sync + Debug {
    /// Size the filesystem reports for the file at `path`.
    fn file_len(&self, path: &Path) -> io::Result<u64>;

    /// Raw contents of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Read the whole file, failing with `UnexpectedEof` if fewer bytes
    /// arrive than the reported size.
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        let expected = self.file_len(path)?;
        let contents = self.read(path)?;
        if (contents.len() as u64) < expected {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("short read: expected {expected} bytes, got {}", contents.len()),
            ));
        }
        Ok(contents)
    }
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn file_len(&self, path: &Path) -> io::Result<u64> {
        let meta = fs::metadata(path)?;
        if meta.is_dir() {
            return Err(io::Error::new(ErrorKind::InvalidInput, "is a directory"));
        }
        Ok(meta.len())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
