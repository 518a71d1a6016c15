use crate::error::{RankError, Result};

/// Query keywords, lowercased. Duplicates are kept and each one counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    keywords: Vec<String>,
}

impl Query {
    /// Build a query from raw keywords.
    /// At least one keyword is required.
    pub fn new<I, T>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|kw| kw.as_ref().to_ascii_lowercase())
            .collect();
        if keywords.is_empty() {
            return Err(RankError::InvalidArgument(
                "at least one query keyword is required".to_string(),
            ));
        }
        Ok(Self { keywords })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
