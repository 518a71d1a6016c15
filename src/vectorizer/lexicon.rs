use std::{collections::HashSet, fs, path::Path};

use tracing::{debug, warn};

/// Outcome of reading an input file.
///
/// An unreadable file is not an error: the caller receives an empty source
/// and a `Missing` status holding the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Missing(String),
}

impl LoadStatus {
    #[inline]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded)
    }
}

/// Read a whole input file, degrading to an empty string when it cannot be read.
/// Invalid UTF-8 is replaced rather than rejected.
pub(crate) fn read_source(path: &Path) -> (String, LoadStatus) {
    match fs::read(path) {
        Ok(bytes) => (String::from_utf8_lossy(&bytes).into_owned(), LoadStatus::Loaded),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "input file unavailable, treating as empty");
            (String::new(), LoadStatus::Missing(e.to_string()))
        }
    }
}

/// Membership set of words loaded from a whitespace separated file.
/// Words are kept exactly as written; no case folding happens here.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: HashSet<String>,
    status: LoadStatus,
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSet {
    pub fn new() -> Self {
        Self {
            words: HashSet::new(),
            status: LoadStatus::Loaded,
        }
    }

    /// Build a set from in-memory words
    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            status: LoadStatus::Loaded,
        }
    }

    /// Split `text` on whitespace and collect every token
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Load a word file.
    /// A file that cannot be opened yields an empty set with `LoadStatus::Missing`.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let (text, status) = read_source(path);
        let mut set = Self::parse(&text);
        set.status = status;
        debug!(path = %path.display(), words = set.len(), "word set loaded");
        set
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }
}

/// Load a whitespace separated word file into a set.
pub fn load_words<P: AsRef<Path>>(path: P) -> WordSet {
    WordSet::load(path)
}

/// Dictionary (inclusion) and stopword (exclusion) filters.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    dictionary: WordSet,
    stopwords: WordSet,
}

impl Lexicon {
    pub fn new(dictionary: WordSet, stopwords: WordSet) -> Self {
        Self { dictionary, stopwords }
    }

    pub fn load<P, Q>(dictionary: P, stopwords: Q) -> Self
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self::new(load_words(dictionary), load_words(stopwords))
    }

    /// true when `token` is a known word and not a stopword
    #[inline]
    pub fn accepts(&self, token: &str) -> bool {
        self.dictionary.contains(token) && !self.stopwords.contains(token)
    }

    pub fn dictionary(&self) -> &WordSet {
        &self.dictionary
    }

    pub fn stopwords(&self) -> &WordSet {
        &self.stopwords
    }
}
