//! Utility functions shared by the index and the server.
//!
//! ## Modules
//!
//! - [`tokenizer`] - Content normalization, word extraction, file identifiers
//! - [`progress`] - Progress reporting that degrades to a no-op
//!
//! ## Key Functions
//!
//! ```no_run
//! use wordsearch::utils::{extract_words, file_identifier};
//!
//! let words = extract_words("Hello, World!", false);
//! // Returns: {"hello", "world"}
//!
//! let id = file_identifier("docs/report.txt");
//! // Returns: "docs/report"
//! ```

pub mod progress;
pub mod tokenizer;

pub use tokenizer::*;
