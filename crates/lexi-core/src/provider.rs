use crate::model::RawLookup;

/// Source of lexical data for a single word
#[async_trait::async_trait]
pub trait LexicalProvider: Send + Sync {
    /// Fetch the raw entry for an already normalized word
    async fn lookup(&self, word: &str) -> Result<RawLookup, LookupError>;

    /// Language tag the provider queries with
    fn language(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No entry found for \"{0}\"")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication error")]
    Authentication,
}
