pub mod signal;
pub mod subscriber;
pub mod ticker;

pub use signal::{Confidence, Direction, Signal, SignalInsert};
pub use subscriber::Subscriber;
pub use ticker::TickerSnapshot;
