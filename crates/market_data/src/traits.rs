use async_trait::async_trait;
use common::models::TickerSnapshot;

use crate::error::MarketError;

/// Source of last-price / percent-change snapshots for a symbol.
/// One outbound call per invocation, no retries; retry policy, if
/// any, belongs to the caller.
#[async_trait]
pub trait TickerSource: Send + Sync {
    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, MarketError>;
}
