//! File locations and limits for one ranking run.

use std::path::{Path, PathBuf};

use crate::vectorizer::evaluate::scoring::MAX_RESULTS;

pub const DEFAULT_DICTIONARY: &str = "dictionary.txt";
pub const DEFAULT_STOPWORDS: &str = "stopwords.txt";
pub const DEFAULT_CORPUS: &str = "article.txt";
pub const DEFAULT_OUTPUT: &str = "results.txt";

/// Paths and result cap for a ranking run.
///
/// `Default` points at the fixed file names in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankConfig {
    /// whitespace separated vocabulary
    pub dictionary: PathBuf,
    /// whitespace separated excluded words
    pub stopwords: PathBuf,
    /// form-feed delimited document collection
    pub corpus: PathBuf,
    /// ranked results, overwritten on each run
    pub output: PathBuf,
    /// hard cap on emitted lines
    pub max_results: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            stopwords: PathBuf::from(DEFAULT_STOPWORDS),
            corpus: PathBuf::from(DEFAULT_CORPUS),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_results: MAX_RESULTS,
        }
    }
}

impl RankConfig {
    /// Default file names resolved against `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            dictionary: dir.join(DEFAULT_DICTIONARY),
            stopwords: dir.join(DEFAULT_STOPWORDS),
            corpus: dir.join(DEFAULT_CORPUS),
            output: dir.join(DEFAULT_OUTPUT),
            max_results: MAX_RESULTS,
        }
    }

    pub fn with_dictionary<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dictionary = path.into();
        self
    }

    pub fn with_stopwords<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.stopwords = path.into();
        self
    }

    pub fn with_corpus<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.corpus = path.into();
        self
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = path.into();
        self
    }
}
