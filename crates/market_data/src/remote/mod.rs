pub mod binance_client;
pub mod ticker_response;
