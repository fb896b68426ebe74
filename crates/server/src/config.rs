use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 3000;

/// Startup configuration. Missing storage or transport credentials
/// are fatal before any request is served.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub telegram_token: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL not set")?;
        let telegram_token =
            env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN not set")?;
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            telegram_token,
            port,
        })
    }
}
