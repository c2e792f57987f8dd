use super::FileSystem;
use std::collections::BTreeMap;
use std::io::{self, Read};

/// An in-memory file tree keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<P, C> FromIterator<(P, C)> for MemoryFs
where
    P: Into<String>,
    C: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut fs = MemoryFs::new();
        for (path, content) in iter {
            fs.insert(path, content);
        }
        fs
    }
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{}: no such file", path))
}

impl FileSystem for MemoryFs {
    fn list_files(&self) -> io::Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        let content = self.files.get(path).ok_or_else(|| not_found(path))?;
        Ok(Box::new(content.as_slice()))
    }

    fn size_hint(&self, path: &str) -> Option<u64> {
        self.files.get(path).map(|c| c.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_lists_sorted() {
        let fs: MemoryFs = [("z.txt", "z"), ("a/b.txt", "b"), ("a.txt", "a")]
            .into_iter()
            .collect();

        assert_eq!(fs.len(), 3);
        assert_eq!(fs.list_files().unwrap(), vec!["a.txt", "a/b.txt", "z.txt"]);
    }

    #[test]
    fn test_read_and_missing() {
        let fs = MemoryFs::new().with_file("file1.txt", "World");

        assert_eq!(fs.read("file1.txt").unwrap(), b"World");
        assert_eq!(fs.size_hint("file1.txt"), Some(5));

        let err = fs.read("file2.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs.size_hint("file2.txt"), None);
    }
}
