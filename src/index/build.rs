use crate::error::{BuildError, ReadFailure, Result};
use crate::index::types::{BuildReport, IndexConfig, ReadErrorPolicy, SkippedFile};
use crate::index::word_index::WordIndex;
use crate::utils::progress::BuildProgress;
use crate::utils::{extract_words, file_identifier};
use crate::vfs::FileSystem;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// Read one file and add each of its distinct words to the index.
///
/// Returns the number of distinct words the file contributed.
fn ingest_file(
    fs: &dyn FileSystem,
    index: &WordIndex,
    path: &str,
    keep_empty: bool,
) -> std::result::Result<usize, ReadFailure> {
    let file_id = file_identifier(path);

    let content = fs.read(path).map_err(|error| ReadFailure {
        path: path.to_string(),
        error,
    })?;

    let text = String::from_utf8_lossy(&content);
    let words = extract_words(&text, keep_empty);
    let word_count = words.len();

    index.insert_all(words, file_id);

    debug!("indexed {} as {} ({} words)", path, file_id, word_count);
    Ok(word_count)
}

/// Build a fresh index from every file in `fs`.
///
/// Each file is ingested by its own rayon task; the call returns only after
/// all of them have finished. On error nothing built so far escapes.
pub fn build_index(fs: &dyn FileSystem, config: &IndexConfig) -> Result<(WordIndex, BuildReport)> {
    let start = Instant::now();

    // Phase 1: collect all file paths
    let spinner = BuildProgress::discovering(config.show_progress);
    let paths = match fs.list_files() {
        Ok(paths) => paths,
        Err(err) => {
            spinner.finish("File discovery failed".to_string());
            return Err(BuildError::Enumerate(err));
        }
    };
    spinner.finish(format!("Found {} files", paths.len()));
    info!("indexing {} files", paths.len());

    // Phase 2: ingest in parallel
    let index = WordIndex::new();
    let progress = BuildProgress::ingesting(config.show_progress, paths.len());
    let abort_early = config.on_read_error == ReadErrorPolicy::Abort;
    let aborted = AtomicBool::new(false);

    let failures: Vec<ReadFailure> = paths
        .par_iter()
        .filter_map(|path| {
            // The build is already lost, don't bother reading more files
            if abort_early && aborted.load(Ordering::Relaxed) {
                progress.inc();
                return None;
            }

            let result = ingest_file(fs, &index, path, config.keep_empty_tokens);
            progress.inc();

            match result {
                Ok(_) => None,
                Err(failure) => {
                    if abort_early {
                        aborted.store(true, Ordering::Relaxed);
                    }
                    Some(failure)
                }
            }
        })
        .collect();

    // Phase 3: apply the read error policy
    let skipped = match config.on_read_error {
        ReadErrorPolicy::Abort if !failures.is_empty() => {
            progress.finish(format!("Aborted: {} unreadable files", failures.len()));
            return Err(BuildError::Unreadable { failures });
        }
        _ => failures
            .into_iter()
            .map(|failure| {
                warn!("skipping {}: {}", failure.path, failure.error);
                SkippedFile {
                    path: failure.path,
                    reason: failure.error.to_string(),
                }
            })
            .collect::<Vec<_>>(),
    };

    let files_indexed = paths.len() - skipped.len();
    progress.finish(format!("Indexed {} files", files_indexed));

    let report = BuildReport {
        files_indexed,
        skipped,
        token_count: index.len(),
        elapsed: start.elapsed(),
    };

    info!(
        "index built: {} files, {} words, {} skipped in {:.2?}",
        report.files_indexed,
        report.token_count,
        report.skipped.len(),
        report.elapsed
    );

    Ok((index, report))
}
