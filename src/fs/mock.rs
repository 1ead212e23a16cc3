// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashMap;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    /// File whose reported size exceeds the bytes actually readable.
    Truncated { content: Vec<u8>, reported_len: u64 },
    /// Every access fails with this error kind.
    Unreadable(ErrorKind),
}

/// In-memory filesystem for tests.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        self.insert(path, MockEntry::File(content.into()));
    }

    pub fn add_truncated(
        &self,
        path: impl AsRef<Path>,
        content: impl Into<Vec<u8>>,
        reported_len: u64,
    ) {
        self.insert(
            path,
            MockEntry::Truncated {
                content: content.into(),
                reported_len,
            },
        );
    }

    pub fn add_unreadable(&self, path: impl AsRef<Path>, kind: ErrorKind) {
        self.insert(path, MockEntry::Unreadable(kind));
    }

    fn insert(&self, path: impl AsRef<Path>, entry: MockEntry) {
        self.lock().insert(path.as_ref().to_path_buf(), entry);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, MockEntry>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn entry(&self, path: &Path) -> io::Result<MockEntry> {
        self.lock().get(path).cloned().ok_or_else(|| {
            io::Error::new(ErrorKind::NotFound, format!("file not found: {path:?}"))
        })
    }
}

impl FileSystem for MockFileSystem {
    fn file_len(&self, path: &Path) -> io::Result<u64> {
        match self.entry(path)? {
            MockEntry::File(content) => Ok(content.len() as u64),
            MockEntry::Truncated { reported_len, .. } => Ok(reported_len),
            MockEntry::Unreadable(kind) => Err(io::Error::from(kind)),
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.entry(path)? {
            MockEntry::File(content) | MockEntry::Truncated { content, .. } => Ok(content),
            MockEntry::Unreadable(kind) => Err(io::Error::from(kind)),
        }
    }
}
