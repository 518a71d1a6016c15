pub mod analyzer;
pub mod corpus;
pub mod evaluate;
pub mod lexicon;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    config::RankConfig,
    vectorizer::{
        analyzer::Analyzer,
        corpus::{
            loader::{load_documents, Document},
            Corpus,
        },
        evaluate::{
            query::Query,
            scoring::{relevance, HitEntry, Hits},
        },
        lexicon::Lexicon,
        tfidf::{DefaultTFIDFEngine, IDFMap, TFIDFEngine, TFMap},
    },
};

/// Per-document TF data
#[derive(Debug, Clone)]
pub struct TFVector<N = f64>
where
    N: Float,
{
    /// document identifier from the corpus file
    pub id: String,
    /// TF of every token the document kept after filtering
    pub tf_map: TFMap<N>,
    /// sum of tokens of this document
    pub token_sum: u64,
}

/// TF-IDF ranker over one loaded corpus.
///
/// Documents keep their corpus order; a document's 1-based index in
/// `documents` is its position in ranked output.
#[derive(Debug, Clone)]
pub struct TFIDFRanker<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Document's TF maps, in corpus order
    pub documents: Vec<TFVector<N>>,
    /// Document frequency per token
    pub corpus: Corpus,
    /// IDF over the whole corpus
    pub idf_cache: IDFMap<N>,
    _marker: PhantomData<E>,
}

impl<N, E> TFIDFRanker<N, E>
where
    N: Float + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Tokenize and count every document, then compute IDF.
    /// Per-document work runs in parallel; IDF waits for all TF maps.
    pub fn from_documents(documents: &[Document], lexicon: &Lexicon) -> Self {
        let analyzer = Analyzer::new(lexicon);
        let documents: Vec<TFVector<N>> = documents
            .par_iter()
            .map(|doc| {
                let freq = analyzer.analyze(&doc.text);
                TFVector {
                    id: doc.id.clone(),
                    tf_map: E::tf_map(&freq),
                    token_sum: freq.token_sum(),
                }
            })
            .collect();

        let corpus = Corpus::from_tf_maps(documents.par_iter().map(|doc| &doc.tf_map));
        let idf_cache = E::idf_map(&corpus);
        debug!(
            documents = corpus.get_doc_num(),
            vocabulary = corpus.vocab_size(),
            tokens = documents.iter().map(|doc| doc.token_sum).sum::<u64>(),
            "tf-idf statistics built"
        );

        Self {
            documents,
            corpus,
            idf_cache,
            _marker: PhantomData,
        }
    }

    /// Load lexicon and corpus from the configured files and build the ranker.
    /// Unreadable files count as empty.
    pub fn load(config: &RankConfig) -> Self {
        let lexicon = Lexicon::load(&config.dictionary, &config.stopwords);
        let (documents, _status) = load_documents(&config.corpus);
        info!(
            dictionary = lexicon.dictionary().len(),
            stopwords = lexicon.stopwords().len(),
            documents = documents.len(),
            "inputs loaded"
        );
        Self::from_documents(&documents, &lexicon)
    }

    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// TF data of the document at 1-based `position`
    pub fn get_tf(&self, position: usize) -> Option<&TFVector<N>> {
        position.checked_sub(1).and_then(|idx| self.documents.get(idx))
    }

    pub fn idf(&self, token: &str) -> Option<N> {
        self.idf_cache.get(token).copied()
    }

    /// Relevance of every document, in corpus order
    pub fn scores(&self, query: &Query) -> Vec<N> {
        self.documents
            .par_iter()
            .map(|doc| relevance(&doc.tf_map, &self.idf_cache, query.keywords()))
            .collect()
    }

    /// All documents with a positive score, best first.
    pub fn rank(&self, query: &Query) -> Hits {
        let list = self
            .scores(query)
            .into_iter()
            .zip(self.documents.iter())
            .enumerate()
            .filter_map(|(idx, (score, doc))| {
                let score = score.to_f64()?;
                (score > 0.0).then(|| HitEntry::new(score, idx + 1, doc.id.clone()))
            })
            .collect();
        let mut hits = Hits::new(list);
        hits.sort_by_score_desc();
        debug!(hits = hits.len(), "documents ranked");
        hits
    }

    /// `rank` limited to `min(requested, cap)` entries
    pub fn search(&self, query: &Query, requested: i64, cap: usize) -> Hits {
        let mut hits = self.rank(query);
        hits.truncate(requested, cap);
        hits
    }
}
