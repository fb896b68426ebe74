use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketError {
    /// Network failure or a non-2xx answer from the market-data source.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream answered, but the expected numeric fields were
    /// missing or unparsable.
    #[error("malformed ticker response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for MarketError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            MarketError::MalformedResponse(e.to_string())
        } else {
            MarketError::UpstreamUnavailable(e.to_string())
        }
    }
}
