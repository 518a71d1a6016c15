//! This crate ranks the documents of a flat-file corpus against query
//! keywords using TF-IDF relevance scores.

pub mod config;
pub mod error;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Ranker
/// The top-level struct of this crate.
/// It tokenizes every document against the lexicon, builds percent-scaled TF
/// maps per document and a log10 IDF map over the corpus, and ranks documents
/// by keyword relevance.
///
/// `TFIDFRanker<N, E>` has the following generic parameters:
/// - `N`: Float type for TF, IDF and scores (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// Per-document tokenization, TF computation and scoring run on rayon; the IDF
/// map is built only after every TF map exists.
pub use vectorizer::TFIDFRanker;

/// Run configuration
/// Input/output file locations, defaulting to `dictionary.txt`,
/// `stopwords.txt`, `article.txt` and `results.txt`, plus the result cap.
pub use config::RankConfig;

/// Error type and result alias
pub use error::{RankError, Result};

/// Lexicon
/// Dictionary (inclusion) and stopword (exclusion) word sets.
/// Missing files load as empty sets tagged with `LoadStatus::Missing`.
pub use vectorizer::lexicon::{Lexicon, LoadStatus, WordSet};

/// Corpus document and loader
/// Documents are separated by form-feed lines, each followed by an identifier line.
pub use vectorizer::corpus::loader::{load_documents, parse_documents, Document};

/// Corpus
/// Document count and per-token document frequency, the base data for IDF.
pub use vectorizer::corpus::Corpus;

/// Token Frequency structure
/// Occurrence count of each token within one document plus the total.
/// Base data for TF calculation.
pub use vectorizer::token::TokenFrequency;

/// TF IDF Calculation Engine Trait
/// Plug different TF and IDF formulas into `TFIDFRanker<N, E>`.
/// `DefaultTFIDFEngine` computes TF as a percentage of the document length and
/// IDF as log10(total documents / documents containing the token).
pub use vectorizer::tfidf::{DefaultTFIDFEngine, IDFMap, TFIDFEngine, TFMap};

/// Query keywords
pub use vectorizer::evaluate::query::Query;

/// Search Hits and Hit Entry structures
/// - `Hits`: ranked results, sorted by descending score with ties
///   (within `SCORE_TIE_EPSILON`) broken by ascending document position
/// - `HitEntry`: score, 1-based document position and document identifier
pub use vectorizer::evaluate::scoring::{relevance, HitEntry, Hits, MAX_RESULTS, SCORE_TIE_EPSILON};

/// Result output
/// One formatting path shared by the console and the results file.
pub use vectorizer::evaluate::report::{emit, emit_to, write_results_file, ResultSink};
