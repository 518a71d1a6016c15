use indexmap::IndexMap;
use num::{Float, NumCast};

use crate::vectorizer::{corpus::Corpus, token::TokenFrequency};

/// token -> TF for one document, percent scaled
pub type TFMap<N = f64> = IndexMap<Box<str>, N>;
/// token -> IDF over the whole corpus
pub type IDFMap<N = f64> = IndexMap<Box<str>, N>;

pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// TFマップを生成する
    /// # Arguments
    /// * `freq` - ドキュメントのトークン頻度
    /// # Returns
    /// * `TFMap<N>` - 出現したトークンだけを含むTFマップ
    fn tf_map(freq: &TokenFrequency) -> TFMap<N>;

    /// IDFマップを生成する
    /// # Arguments
    /// * `corpus` - コーパス
    /// # Returns
    /// * `IDFMap<N>` - 一度でも出現したトークンを含むIDFマップ
    fn idf_map(corpus: &Corpus) -> IDFMap<N>;
}

/// デフォルトのTF-IDFエンジン
/// TF = 100 * count / total, IDF = log10(doc_num / doc_freq)
/// `f32`、`f64`に対応
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Percent of the document's tokens that are this token
    #[inline]
    pub fn tf_calc(count: u32, total_count: u64) -> f64 {
        (count as f64 / total_count as f64) * 100.0
    }

    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / doc_freq as f64).log10()
    }
}

#[inline]
fn from_f64<N: Float>(value: f64) -> N {
    <N as NumCast>::from(value).unwrap_or_else(N::zero)
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn tf_map(freq: &TokenFrequency) -> TFMap<N> {
        let total_count = freq.token_sum();
        // an empty document yields an empty map
        freq.iter()
            .map(|(token, count)| (Box::from(token), from_f64(Self::tf_calc(count, total_count))))
            .collect()
    }

    fn idf_map(corpus: &Corpus) -> IDFMap<N> {
        let doc_num = corpus.get_doc_num();
        corpus
            .iter()
            .map(|(token, doc_freq)| {
                (Box::from(token), from_f64(Self::idf_calc(doc_num, doc_freq)))
            })
            .collect()
    }
}
