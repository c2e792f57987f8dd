pub mod build;
pub mod stats;
pub mod types;
pub mod word_index;

pub use build::build_index;
pub use stats::IndexStats;
pub use types::*;
pub use word_index::WordIndex;
