use common::models::TickerSnapshot;
use serde::Deserialize;

use crate::error::MarketError;

/// Raw 24hr-ticker payload. Binance serializes the numeric fields as
/// strings, so conversion to a snapshot is fallible.
#[derive(Debug, Deserialize)]
pub struct Ticker24hrResponse {
    #[serde(rename = "lastPrice")]
    pub last_price: String,
    #[serde(rename = "priceChangePercent")]
    pub price_change_percent: String,
}

impl Ticker24hrResponse {
    pub fn to_snapshot(&self) -> Result<TickerSnapshot, MarketError> {
        let last_price = parse_field("lastPrice", &self.last_price)?;
        let change_percent = parse_field("priceChangePercent", &self.price_change_percent)?;
        Ok(TickerSnapshot {
            last_price,
            change_percent,
        })
    }
}

fn parse_field(name: &str, raw: &str) -> Result<f64, MarketError> {
    raw.parse::<f64>()
        .map_err(|_| MarketError::MalformedResponse(format!("{name} is not numeric: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_ticker() {
        let raw = r#"{"symbol":"BTCUSDT","lastPrice":"50000.00","priceChangePercent":"4.200"}"#;
        let response: Ticker24hrResponse = serde_json::from_str(raw).unwrap();
        let snapshot = response.to_snapshot().unwrap();

        assert_eq!(snapshot.last_price, 50000.0);
        assert_eq!(snapshot.change_percent, 4.2);
    }

    #[test]
    fn non_numeric_price_is_malformed() {
        let response = Ticker24hrResponse {
            last_price: "n/a".to_string(),
            price_change_percent: "1.0".to_string(),
        };

        match response.to_snapshot() {
            Err(MarketError::MalformedResponse(msg)) => assert!(msg.contains("lastPrice")),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_fails_deserialization() {
        let raw = r#"{"symbol":"BTCUSDT","lastPrice":"50000.00"}"#;
        assert!(serde_json::from_str::<Ticker24hrResponse>(raw).is_err());
    }
}
