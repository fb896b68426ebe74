use std::sync::Arc;

use common::models::Signal;
use dispatch::{render, BroadcastDispatcher, BroadcastReport};
use market_data::{MarketError, TickerSource};
use storage::{SignalStore, StorageError, SubscriberRegistry};
use strategy::{synthesize, SignalPolicy, StrategyError};
use thiserror::Error;
use tracing::info;

/// Terminal failures of one generation request. Delivery failures are
/// not represented here; they live in the `BroadcastReport`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Market(#[from] MarketError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The generation pipeline: ticker fetch, synthesis, persistence,
/// then fan-out. All collaborators are injected.
pub struct SignalPipeline {
    ticker: Arc<dyn TickerSource>,
    store: Arc<dyn SignalStore>,
    registry: Arc<dyn SubscriberRegistry>,
    dispatcher: BroadcastDispatcher,
    policy: SignalPolicy,
}

impl SignalPipeline {
    pub fn new(
        ticker: Arc<dyn TickerSource>,
        store: Arc<dyn SignalStore>,
        registry: Arc<dyn SubscriberRegistry>,
        dispatcher: BroadcastDispatcher,
        policy: SignalPolicy,
    ) -> Self {
        Self {
            ticker,
            store,
            registry,
            dispatcher,
            policy,
        }
    }

    /// Runs one generation request. The signal must be durably saved
    /// before any delivery starts: a persistence failure means zero
    /// broadcast attempts.
    pub async fn generate(
        &self,
        symbol: &str,
    ) -> Result<(Signal, BroadcastReport), PipelineError> {
        let snapshot = self.ticker.fetch_ticker(symbol).await?;
        let draft = synthesize(symbol, &snapshot, &self.policy)?;
        let signal = self.store.save(draft).await?;

        info!(
            "Generated {} {} signal for {} at {}",
            signal.confidence, signal.direction, signal.asset, signal.entry_price
        );

        let audience = self.registry.list_subscribed().await?;
        let message = render::signal_message(&signal);
        let report = self.dispatcher.broadcast(&message, &audience).await;

        Ok((signal, report))
    }
}
