/// Price-target multipliers applied to the entry price for one
/// trade direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetMultipliers {
    pub stop_loss: f64,
    pub take_profits: [f64; 3],
}

/// Tunable parameters of the synthesizer. The defaults carry the
/// values this pipeline has always used; they are parameters, not a
/// derived trading strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalPolicy {
    /// `|change%|` strictly above this is HIGH confidence.
    pub high_confidence_threshold: f64,
    /// `|change%|` strictly above this (and not HIGH) is MEDIUM.
    pub medium_confidence_threshold: f64,
    pub long_targets: TargetMultipliers,
    pub short_targets: TargetMultipliers,
    pub risk_reward: String,
}

impl Default for SignalPolicy {
    fn default() -> Self {
        Self {
            high_confidence_threshold: 3.0,
            medium_confidence_threshold: 1.0,
            long_targets: TargetMultipliers {
                stop_loss: 0.98,
                take_profits: [1.01, 1.02, 1.03],
            },
            short_targets: TargetMultipliers {
                stop_loss: 1.02,
                take_profits: [0.99, 0.98, 0.97],
            },
            risk_reward: "1:2.5".to_string(),
        }
    }
}
