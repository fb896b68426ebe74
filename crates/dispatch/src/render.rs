use common::models::{Direction, Signal};

/// Renders the broadcast text for one signal. Presentation only; the
/// stored record keeps plain numeric fields.
pub fn signal_message(signal: &Signal) -> String {
    let direction_icon = match signal.direction {
        Direction::Long => "🟢",
        Direction::Short => "🔴",
    };

    format!(
        "🎯 *TRADE SIGNAL*\n\
         \n\
         📊 {asset}\n\
         {icon} {direction}\n\
         💰 Entry: ${entry:.2}\n\
         💪 Confidence: {confidence}\n\
         \n\
         🛡 Stop: ${stop:.2}\n\
         🎯 Take Profit:\n\
         \u{20}  ${tp1:.2}\n\
         \u{20}  ${tp2:.2}\n\
         \u{20}  ${tp3:.2}\n\
         \n\
         ⚖ R/R: {rr}\n\
         \n\
         🕒 {timestamp}",
        asset = signal.asset,
        icon = direction_icon,
        direction = signal.direction,
        entry = signal.entry_price,
        confidence = signal.confidence,
        stop = signal.stop_loss,
        tp1 = signal.take_profit1,
        tp2 = signal.take_profit2,
        tp3 = signal.take_profit3,
        rr = signal.risk_reward,
        timestamp = signal.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::models::Confidence;

    #[test]
    fn message_carries_levels_with_two_decimals() {
        let signal = Signal {
            id: 1,
            asset: "BTC/USDT".to_string(),
            direction: Direction::Long,
            entry_price: 50000.0,
            confidence: Confidence::High,
            stop_loss: 49000.0,
            take_profit1: 50500.0,
            take_profit2: 51000.0,
            take_profit3: 51500.0,
            risk_reward: "1:2.5".to_string(),
            created_at: Utc::now(),
        };

        let text = signal_message(&signal);
        assert!(text.contains("BTC/USDT"));
        assert!(text.contains("LONG"));
        assert!(text.contains("$50000.00"));
        assert!(text.contains("$49000.00"));
        assert!(text.contains("HIGH"));
        assert!(text.contains("1:2.5"));
    }
}
