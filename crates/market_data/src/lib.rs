pub mod error;
pub mod remote;
pub mod traits;

pub use error::MarketError;
pub use remote::binance_client::BinanceTickerClient;
pub use traits::TickerSource;
