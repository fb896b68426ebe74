use async_trait::async_trait;
use thiserror::Error;

/// Why one delivery attempt failed. Neither kind is retried within
/// the same broadcast; a later trigger may reach the recipient again.
#[derive(Debug, Error)]
pub enum SendError {
    /// The channel rejected this recipient (blocked the bot, deleted
    /// the chat). Durable until the recipient acts.
    #[error("recipient unreachable: {0}")]
    RecipientUnreachable(String),

    /// Transient channel failure (network, timeouts, upstream 5xx).
    #[error("transport error: {0}")]
    Transport(String),
}

/// One-shot text delivery to a single recipient.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, recipient_id: i64, text: &str) -> Result<(), SendError>;
}
