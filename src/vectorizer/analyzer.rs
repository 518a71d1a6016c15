use crate::vectorizer::{lexicon::Lexicon, token::TokenFrequency};

/// Strip every non ASCII letter from `raw` and lowercase what is left.
#[inline]
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Turns raw document text into the filtered token stream used for TF.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Analyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Whitespace split, normalize, then keep tokens the lexicon accepts.
    /// Order and duplicates are preserved.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(normalize_token)
            .filter(|token| !token.is_empty() && self.lexicon.accepts(token))
            .collect()
    }

    /// Tokenize and count
    pub fn analyze(&self, text: &str) -> TokenFrequency {
        self.tokenize(text).into_iter().collect()
    }
}
