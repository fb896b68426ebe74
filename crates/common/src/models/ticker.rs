/// A point-in-time view of one symbol's market state, as returned by
/// the upstream ticker endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerSnapshot {
    pub last_price: f64,
    pub change_percent: f64,
}
