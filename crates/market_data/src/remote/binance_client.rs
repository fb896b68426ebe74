use async_trait::async_trait;
use common::models::TickerSnapshot;
use reqwest::Client;
use tracing::{debug, error};

use crate::error::MarketError;
use crate::remote::ticker_response::Ticker24hrResponse;
use crate::traits::TickerSource;

const DEFAULT_BASE_URL: &str = "https://api.binance.com";

/// Public (unsigned) Binance REST client for 24hr ticker snapshots.
#[derive(Clone)]
pub struct BinanceTickerClient {
    client: Client,
    base_url: String,
}

impl BinanceTickerClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for BinanceTickerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TickerSource for BinanceTickerClient {
    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, MarketError> {
        // Only local validation; anything else is the upstream's call.
        if symbol.is_empty() {
            return Err(MarketError::UpstreamUnavailable(
                "symbol must not be empty".to_string(),
            ));
        }

        let url = format!(
            "{}/api/v3/ticker/24hr?symbol={}",
            self.base_url,
            symbol.to_uppercase()
        );

        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            error!("Ticker request for {} failed: {} {}", symbol, status, body);
            return Err(MarketError::UpstreamUnavailable(format!(
                "ticker request returned {status}: {body}"
            )));
        }

        let ticker = resp.json::<Ticker24hrResponse>().await?;
        let snapshot = ticker.to_snapshot()?;
        debug!(
            "Fetched ticker for {}: price={} change={}%",
            symbol, snapshot.last_price, snapshot.change_percent
        );
        Ok(snapshot)
    }
}
