use common::models::{Confidence, Direction, SignalInsert, TickerSnapshot};
use thiserror::Error;

use crate::policy::SignalPolicy;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("invalid ticker: {0}")]
    InvalidTicker(String),
}

/// Maps a ticker snapshot to an unsaved signal. Pure: no I/O, no
/// clock access; `created_at` is assigned by the store.
pub fn synthesize(
    symbol: &str,
    ticker: &TickerSnapshot,
    policy: &SignalPolicy,
) -> Result<SignalInsert, StrategyError> {
    if !ticker.last_price.is_finite() || ticker.last_price <= 0.0 {
        return Err(StrategyError::InvalidTicker(format!(
            "last price {} is not a positive number",
            ticker.last_price
        )));
    }
    if !ticker.change_percent.is_finite() {
        return Err(StrategyError::InvalidTicker(format!(
            "change percent {} is not finite",
            ticker.change_percent
        )));
    }

    let direction = if ticker.change_percent >= 0.0 {
        Direction::Long
    } else {
        Direction::Short
    };

    // Boundary values fall into the lower tier.
    let magnitude = ticker.change_percent.abs();
    let confidence = if magnitude > policy.high_confidence_threshold {
        Confidence::High
    } else if magnitude > policy.medium_confidence_threshold {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let targets = match direction {
        Direction::Long => &policy.long_targets,
        Direction::Short => &policy.short_targets,
    };

    let entry = ticker.last_price;
    Ok(SignalInsert {
        asset: asset_label(symbol),
        direction,
        entry_price: round2(entry),
        confidence,
        stop_loss: round2(entry * targets.stop_loss),
        take_profit1: round2(entry * targets.take_profits[0]),
        take_profit2: round2(entry * targets.take_profits[1]),
        take_profit3: round2(entry * targets.take_profits[2]),
        risk_reward: policy.risk_reward.clone(),
    })
}

/// `"BTCUSDT"` becomes `"BTC/USDT"`; anything without the trailing
/// quote literal passes through unchanged.
fn asset_label(symbol: &str) -> String {
    match symbol.strip_suffix("USDT") {
        Some(base) => format!("{base}/USDT"),
        None => symbol.to_string(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(last_price: f64, change_percent: f64) -> TickerSnapshot {
        TickerSnapshot {
            last_price,
            change_percent,
        }
    }

    #[test]
    fn non_negative_change_is_long() {
        let policy = SignalPolicy::default();
        let long = synthesize("BTCUSDT", &ticker(100.0, 0.0), &policy).unwrap();
        assert_eq!(long.direction, Direction::Long);

        let short = synthesize("BTCUSDT", &ticker(100.0, -0.0001), &policy).unwrap();
        assert_eq!(short.direction, Direction::Short);
    }

    #[test]
    fn confidence_boundaries_fall_into_lower_tier() {
        let policy = SignalPolicy::default();
        let cases = [
            (0.5, Confidence::Low),
            (1.0, Confidence::Low),
            (1.0001, Confidence::Medium),
            (3.0, Confidence::Medium),
            (3.0001, Confidence::High),
            (-3.0, Confidence::Medium),
            (-4.2, Confidence::High),
        ];

        for (change, expected) in cases {
            let signal = synthesize("BTCUSDT", &ticker(100.0, change), &policy).unwrap();
            assert_eq!(signal.confidence, expected, "change = {change}");
        }
    }

    #[test]
    fn long_signal_matches_reference_vector() {
        let signal = synthesize(
            "BTCUSDT",
            &ticker(50000.0, 4.2),
            &SignalPolicy::default(),
        )
        .unwrap();

        assert_eq!(signal.asset, "BTC/USDT");
        assert_eq!(signal.direction, Direction::Long);
        assert_eq!(signal.confidence, Confidence::High);
        assert_eq!(signal.entry_price, 50000.0);
        assert_eq!(signal.stop_loss, 49000.0);
        assert_eq!(signal.take_profit1, 50500.0);
        assert_eq!(signal.take_profit2, 51000.0);
        assert_eq!(signal.take_profit3, 51500.0);
        assert_eq!(signal.risk_reward, "1:2.5");
    }

    #[test]
    fn short_signal_matches_reference_vector() {
        let signal = synthesize(
            "ETHUSDT",
            &ticker(3000.0, -0.5),
            &SignalPolicy::default(),
        )
        .unwrap();

        assert_eq!(signal.asset, "ETH/USDT");
        assert_eq!(signal.direction, Direction::Short);
        assert_eq!(signal.confidence, Confidence::Low);
        assert_eq!(signal.stop_loss, 3060.0);
        assert_eq!(signal.take_profit1, 2970.0);
        assert_eq!(signal.take_profit2, 2940.0);
        assert_eq!(signal.take_profit3, 2910.0);
    }

    #[test]
    fn targets_are_rounded_to_cents() {
        let signal = synthesize(
            "BTCUSDT",
            &ticker(33333.33, 2.0),
            &SignalPolicy::default(),
        )
        .unwrap();

        // 33333.33 * 0.98 = 32666.6634
        assert_eq!(signal.stop_loss, 32666.66);
        // 33333.33 * 1.01 = 33666.6633
        assert_eq!(signal.take_profit1, 33666.66);
    }

    #[test]
    fn symbol_without_usdt_suffix_passes_through() {
        let signal = synthesize("BTCEUR", &ticker(100.0, 1.5), &SignalPolicy::default()).unwrap();
        assert_eq!(signal.asset, "BTCEUR");
    }

    #[test]
    fn invalid_prices_are_rejected() {
        let policy = SignalPolicy::default();
        assert!(synthesize("BTCUSDT", &ticker(f64::NAN, 1.0), &policy).is_err());
        assert!(synthesize("BTCUSDT", &ticker(0.0, 1.0), &policy).is_err());
        assert!(synthesize("BTCUSDT", &ticker(100.0, f64::INFINITY), &policy).is_err());
    }
}
