use std::{cmp::Ordering, fmt};

use num::Float;

use crate::{utils::sort::merge_sort_by, vectorizer::tfidf::{IDFMap, TFMap}};

/// Scores closer than this are treated as equal and ordered by position
pub const SCORE_TIE_EPSILON: f64 = 1e-6;
/// Hard cap on the number of results emitted
pub const MAX_RESULTS: usize = 100;

/// Sum of TF * IDF over the keywords.
/// A keyword missing from either map contributes nothing.
pub fn relevance<N, T>(tf: &TFMap<N>, idf: &IDFMap<N>, keywords: &[T]) -> N
where
    N: Float,
    T: AsRef<str>,
{
    keywords.iter().fold(N::zero(), |score, keyword| {
        let keyword = keyword.as_ref();
        match (tf.get(keyword), idf.get(keyword)) {
            (Some(&t), Some(&i)) => score + t * i,
            _ => score,
        }
    })
}

/// One ranked document
#[derive(Debug, Clone, PartialEq)]
pub struct HitEntry<K = String> {
    pub score: f64,
    /// 1-based position of the document in the corpus
    pub position: usize,
    pub key: K,
}

impl<K> HitEntry<K> {
    pub fn new(score: f64, position: usize, key: K) -> Self {
        Self { score, position, key }
    }
}

impl<K: fmt::Display> fmt::Display for HitEntry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {} {}", self.score, self.position, self.key)
    }
}

/// Higher score first; scores within `SCORE_TIE_EPSILON` go by ascending position.
pub fn compare_hits<K>(a: &HitEntry<K>, b: &HitEntry<K>) -> Ordering {
    if (a.score - b.score).abs() > SCORE_TIE_EPSILON {
        b.score.total_cmp(&a.score)
    } else {
        a.position.cmp(&b.position)
    }
}

/// Structure to store search results
#[derive(Clone, PartialEq)]
pub struct Hits<K = String> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Default for Hits<K> {
    fn default() -> Self {
        Hits { list: Vec::new() }
    }
}

impl<K> Hits<K> {
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score with the position tie-break
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|hit| !hit.score.is_nan());
        merge_sort_by(&mut self.list, compare_hits);
        self
    }

    /// Keep the first `min(requested, cap)` entries.
    /// A non-positive request keeps nothing.
    pub fn truncate(&mut self, requested: i64, cap: usize) -> &mut Self {
        let keep = usize::try_from(requested).unwrap_or(0).min(cap);
        self.list.truncate(keep);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry<K>> {
        self.list.iter()
    }
}

impl<K: fmt::Display> fmt::Display for Hits<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.list {
            writeln!(f, "{hit}")?;
        }
        Ok(())
    }
}

impl<K> fmt::Debug for Hits<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each hit on a new line
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    #{} {:?}: {:.6}", hit.position, hit.key, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}
