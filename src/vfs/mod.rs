//! Read-only filesystem abstraction consumed by the index builder.
//!
//! Paths handed out and accepted by a [`FileSystem`] are relative to its root
//! and always use `/` as the separator, regardless of platform.
//!
//! - [`DiskFs`] - walks a directory on the local disk
//! - [`MemoryFs`] - path → bytes map, for tests and embedded corpora

mod disk;
mod memory;

pub use disk::DiskFs;
pub use memory::MemoryFs;

use std::io::{self, Read};

/// A read-only tree of files that can be shared across ingestion tasks.
pub trait FileSystem: Send + Sync {
    /// List every regular file under the root, recursively.
    fn list_files(&self) -> io::Result<Vec<String>>;

    /// Open a file for sequential reading.
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + Send + '_>>;

    /// Best-effort file size, only used to size the read buffer.
    fn size_hint(&self, path: &str) -> Option<u64>;

    /// Read a whole file into memory.
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        let capacity = self
            .size_hint(path)
            .and_then(|size| usize::try_from(size).ok())
            .unwrap_or(0);
        let mut content = Vec::with_capacity(capacity.saturating_add(1));
        self.open(path)?.read_to_end(&mut content)?;
        Ok(content)
    }
}
