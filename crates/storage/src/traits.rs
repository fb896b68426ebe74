use async_trait::async_trait;
use common::models::{Signal, SignalInsert, Subscriber};

use crate::error::StorageError;

/// Append-only store of generated signals. No update or delete is
/// exposed; a saved signal is the audit record of what was broadcast.
#[async_trait]
pub trait SignalStore: Send + Sync {
    /// Assigns `created_at` and returns the durable copy.
    async fn save(&self, signal: SignalInsert) -> Result<Signal, StorageError>;

    async fn count(&self) -> Result<i64, StorageError>;
}

/// Per-recipient subscription state, keyed by `recipient_id`. Every
/// operation is a single atomic upsert; repeated calls with the same
/// id never create duplicate rows.
#[async_trait]
pub trait SubscriberRegistry: Send + Sync {
    /// Create with `subscribed = true` if absent; otherwise refresh
    /// the display name and leave the subscription flag untouched.
    async fn upsert_on_contact(
        &self,
        recipient_id: i64,
        display_name: Option<&str>,
    ) -> Result<Subscriber, StorageError>;

    /// Create-if-absent with the given flag, else update it in place.
    async fn set_subscribed(
        &self,
        recipient_id: i64,
        subscribed: bool,
    ) -> Result<Subscriber, StorageError>;

    /// Current broadcast audience. Ordering is not meaningful.
    async fn list_subscribed(&self) -> Result<Vec<Subscriber>, StorageError>;

    async fn count_subscribed(&self) -> Result<i64, StorageError>;
}
