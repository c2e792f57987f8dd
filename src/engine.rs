//! Search engine: owns the published index, rebuilds it and answers lookups.

use crate::error::Result;
use crate::index::{BuildReport, FileId, IndexConfig, IndexStats, WordIndex, build_index};
use crate::utils::normalize_query;
use crate::vfs::FileSystem;
use log::debug;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Word lookup over a file tree.
///
/// The engine is unready until the first successful [`Engine::init`]. Each
/// build populates a brand new [`WordIndex`] and swaps it in only when every
/// file has been ingested, so readers see either the previous index or the
/// complete new one.
pub struct Engine {
    fs: Arc<dyn FileSystem>,
    config: IndexConfig,
    current: RwLock<Option<Arc<WordIndex>>>,
    // Held for a whole build so concurrent rebuilds publish in start order
    build_lock: Mutex<()>,
}

impl Engine {
    pub fn new(fs: impl FileSystem + 'static) -> Self {
        Self::with_config(fs, IndexConfig::default())
    }

    pub fn with_config(fs: impl FileSystem + 'static, config: IndexConfig) -> Self {
        Self::from_shared(Arc::new(fs), config)
    }

    /// Build on a filesystem handle that is shared with other owners
    pub fn from_shared(fs: Arc<dyn FileSystem>, config: IndexConfig) -> Self {
        Self {
            fs,
            config,
            current: RwLock::new(None),
            build_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Build the index from scratch and publish it.
    ///
    /// Blocks until every ingestion task has finished. On error the
    /// previously published index, if any, stays in place. Concurrent calls
    /// run one after another; lookups are never blocked by a build.
    pub fn init(&self) -> Result<BuildReport> {
        let _building = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let (index, report) = build_index(self.fs.as_ref(), &self.config)?;
        let index = Arc::new(index);

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(index);
        Ok(report)
    }

    pub fn is_ready(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Shared handle to the published index
    pub fn index(&self) -> Option<Arc<WordIndex>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Files containing `word`, matched case-insensitively as a single token.
    ///
    /// A miss, like a lookup before the first build, is an empty list.
    pub fn search(&self, word: &str) -> Vec<FileId> {
        let Some(index) = self.index() else {
            debug!("search for {:?} before the index was built", word);
            return Vec::new();
        };
        index.load(&normalize_query(word)).unwrap_or_default()
    }

    pub fn stats(&self) -> Option<IndexStats> {
        self.index().map(|index| index.stats())
    }
}
