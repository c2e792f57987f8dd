use serde::{Deserialize, Serialize};
use std::fmt;

/// Size figures for a built index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IndexStats {
    /// Distinct words
    pub word_count: usize,
    /// Distinct files appearing in at least one posting list
    pub file_count: usize,
    /// Sum of all posting list lengths
    pub posting_count: usize,
    pub largest_posting: usize,
}

impl IndexStats {
    pub fn avg_posting_len(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.posting_count as f64 / self.word_count as f64
        }
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Files:            {}", self.file_count)?;
        writeln!(f, "Words:            {}", self.word_count)?;
        writeln!(f, "Postings:         {}", self.posting_count)?;
        writeln!(f, "Avg files/word:   {:.2}", self.avg_posting_len())?;
        write!(f, "Largest posting:  {}", self.largest_posting)
    }
}
