//! # wordsearch - exact word lookup over a directory of text files
//!
//! wordsearch reads every file under a root directory once, builds an
//! in-memory inverted index from normalized words to the files containing
//! them, and then answers single-word lookups with one hash map access.
//!
//! ## Architecture
//!
//! - [`index`] - The concurrent word index and the parallel build
//! - [`engine`] - Owns the published index, rebuilds it, serves lookups
//! - [`vfs`] - Read-only filesystem abstraction (disk and in-memory)
//! - [`server`] - HTTP endpoint `GET /files/search?q=<word>`
//! - [`utils`] - Normalization and tokenization, progress reporting
//!
//! ## Quick Start
//!
//! ```no_run
//! use wordsearch::engine::Engine;
//! use wordsearch::vfs::DiskFs;
//!
//! let engine = Engine::new(DiskFs::new("./files"));
//! engine.init().unwrap();
//!
//! for file in engine.search("World") {
//!     println!("{}", file);
//! }
//! ```
//!
//! ## Normalization
//!
//! File content has the characters `. , ! " ' ? ( )` replaced by spaces,
//! whitespace runs collapsed, and is lowercased before being split on
//! spaces. Queries are only lowercased. Files are reported by their relative
//! path without extension, so `docs/report.txt` is found as `docs/report`.

pub mod engine;
pub mod error;
pub mod index;
pub mod server;
pub mod utils;
pub mod vfs;
