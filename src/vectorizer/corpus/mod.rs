pub mod loader;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::vectorizer::tfidf::TFMap;

/// keep document count and per-term document counts for IDF
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added, including those with no tokens
    doc_num: u64,
    /// term -> number of documents containing it
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Build document counts from per-document TF maps.
    /// Each worker folds into its own partial corpus; partials are merged afterwards.
    pub fn from_tf_maps<'a, N, I>(maps: I) -> Self
    where
        N: Sync + 'a,
        I: IntoParallelIterator<Item = &'a TFMap<N>>,
    {
        maps.into_par_iter()
            .fold(Corpus::new, |mut corpus, tf| {
                corpus.add_set(tf.keys());
                corpus
            })
            .reduce(Corpus::new, |mut acc, part| {
                acc.merge_corpus(&part);
                acc
            })
    }

    /// Add one document's distinct terms to the corpus
    pub fn add_set<I, T>(&mut self, terms: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            let term = term.as_ref();
            if let Some(count) = self.term_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_counts.insert(term.into(), 1);
            }
        }
    }

    /// Merge another corpus into self
    pub fn merge_corpus(&mut self, other: &Corpus) {
        self.doc_num += other.doc_num;
        for (term, &count_other) in other.term_counts.iter() {
            *self.term_counts.entry(term.clone()).or_insert(0) += count_other;
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, &count)| (term.as_ref(), count))
    }
}
