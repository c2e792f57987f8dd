//! Concurrency-safe inverted index: word → sorted, duplicate-free file list.

use super::stats::IndexStats;
use super::types::FileId;
use ahash::AHashMap;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Word → files mapping guarded by a reader/writer lock.
///
/// Readers proceed in parallel; a writer excludes everyone for the duration
/// of one call. Ingestion goes through [`WordIndex::insert_all`], which does
/// the whole insert-dedup-sort step under a single write lock, so concurrent
/// files sharing a word can never drop each other's entry.
#[derive(Debug, Default)]
pub struct WordIndex {
    map: RwLock<AHashMap<String, Vec<FileId>>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write leaves the map consistent, so a poisoned lock is still usable
    fn read_map(&self) -> RwLockReadGuard<'_, AHashMap<String, Vec<FileId>>> {
        self.map.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_map(&self) -> RwLockWriteGuard<'_, AHashMap<String, Vec<FileId>>> {
        self.map.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current file list for a word, `None` if it was never stored
    pub fn load(&self, word: &str) -> Option<Vec<FileId>> {
        self.read_map().get(word).cloned()
    }

    /// Replace the file list for a word with exactly `files`.
    ///
    /// The caller is responsible for ordering and deduplication.
    pub fn store(&self, word: impl Into<String>, files: Vec<FileId>) {
        self.write_map().insert(word.into(), files);
    }

    /// Add `file` to the list of `word`, keeping it sorted and unique
    pub fn insert(&self, word: &str, file: &str) {
        self.insert_all([word], file);
    }

    /// Add `file` to the list of every word in `words` under one write lock
    pub fn insert_all<I, S>(&self, words: I, file: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = self.write_map();
        for word in words {
            let files = map.entry(word.as_ref().to_owned()).or_default();
            if let Err(pos) = files.binary_search_by(|probe| probe.as_str().cmp(file)) {
                files.insert(pos, file.to_owned());
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.read_map().contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.read_map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_map().is_empty()
    }

    /// Ordered copy of the whole mapping
    pub fn snapshot(&self) -> BTreeMap<String, Vec<FileId>> {
        self.read_map()
            .iter()
            .map(|(word, files)| (word.clone(), files.clone()))
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        let map = self.read_map();
        let mut files: Vec<&str> = map.values().flatten().map(String::as_str).collect();
        files.sort_unstable();
        files.dedup();

        IndexStats {
            word_count: map.len(),
            file_count: files.len(),
            posting_count: map.values().map(Vec::len).sum(),
            largest_posting: map.values().map(Vec::len).max().unwrap_or(0),
        }
    }
}
