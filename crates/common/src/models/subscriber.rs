use chrono::{DateTime, Utc};
use serde::Serialize;

/// One chat recipient. `recipient_id` is the Telegram chat id and the
/// unique key; a subscriber is created on first contact and never
/// hard-deleted, only toggled via `subscribed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub recipient_id: i64,
    pub display_name: Option<String>,
    pub subscribed: bool,
    pub created_at: DateTime<Utc>,
}
