use super::FileSystem;
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Files under a directory on the local disk.
///
/// Unlike a code-search walk, nothing is filtered: hidden files and files
/// matched by ignore rules are listed too.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/').fold(self.root.clone(), |acc, part| acc.join(part))
    }
}

/// Join path components with `/` so identifiers look the same on every platform
fn to_slash_path(rel_path: &Path) -> Option<String> {
    let parts: Option<Vec<&str>> = rel_path.components().map(|c| c.as_os_str().to_str()).collect();
    parts.map(|parts| parts.join("/"))
}

impl FileSystem for DiskFs {
    fn list_files(&self) -> io::Result<Vec<String>> {
        let meta = fs::metadata(&self.root)?;
        if !meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", self.root.display()),
            ));
        }

        let walker = WalkBuilder::new(&self.root).standard_filters(false).build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(io::Error::other)?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let Ok(rel_path) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            match to_slash_path(rel_path) {
                Some(path) => files.push(path),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("non UTF-8 path: {}", entry.path().display()),
                    ));
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + Send + '_>> {
        Ok(Box::new(File::open(self.resolve(path))?))
    }

    fn size_hint(&self, path: &str) -> Option<u64> {
        fs::metadata(self.resolve(path)).ok().map(|m| m.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_files_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("nested/c.txt"), "c").unwrap();
        fs::write(dir.path().join("nested/deeper/d.md"), "d").unwrap();

        let disk = DiskFs::new(dir.path());
        let files = disk.list_files().unwrap();

        assert_eq!(files, vec!["a.txt", "b.txt", "nested/c.txt", "nested/deeper/d.md"]);
    }

    #[test]
    fn test_list_files_includes_hidden_and_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.txt"), "x").unwrap();
        fs::write(dir.path().join(".gitignore"), "skipped.txt\n").unwrap();
        fs::write(dir.path().join("skipped.txt"), "x").unwrap();

        let files = DiskFs::new(dir.path()).list_files().unwrap();

        assert!(files.contains(&".hidden.txt".to_string()));
        assert!(files.contains(&"skipped.txt".to_string()));
    }

    #[test]
    fn test_list_files_missing_root_fails() {
        let dir = tempdir().unwrap();
        let disk = DiskFs::new(dir.path().join("does-not-exist"));
        assert!(disk.list_files().is_err());
    }

    #[test]
    fn test_read_nested_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/file.txt"), "Hello World").unwrap();

        let disk = DiskFs::new(dir.path());
        assert_eq!(disk.size_hint("nested/file.txt"), Some(11));
        assert_eq!(disk.read("nested/file.txt").unwrap(), b"Hello World");
        assert!(disk.read("nested/missing.txt").is_err());
    }
}
