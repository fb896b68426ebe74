pub mod policy;
pub mod synthesizer;

pub use policy::{SignalPolicy, TargetMultipliers};
pub use synthesizer::{synthesize, StrategyError};
