use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::models::Subscriber;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::error::StorageError;
use crate::traits::SubscriberRegistry;

const SUBSCRIBER_COLUMNS: &str = "recipient_id, display_name, subscribed, created_at";

pub struct SubscriberRepository {
    pool: SqlitePool,
}

impl SubscriberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_subscriber(row: &SqliteRow) -> Result<Subscriber, StorageError> {
    Ok(Subscriber {
        recipient_id: row.try_get("recipient_id")?,
        display_name: row.try_get("display_name")?,
        subscribed: row.try_get("subscribed")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

#[async_trait]
impl SubscriberRegistry for SubscriberRepository {
    async fn upsert_on_contact(
        &self,
        recipient_id: i64,
        display_name: Option<&str>,
    ) -> Result<Subscriber, StorageError> {
        let row = sqlx::query(&format!(
            r#"
                INSERT INTO subscribers (recipient_id, display_name, subscribed, created_at)
                VALUES (?, ?, 1, ?)
                ON CONFLICT (recipient_id) DO UPDATE SET display_name = excluded.display_name
                RETURNING {SUBSCRIBER_COLUMNS}
            "#
        ))
        .bind(recipient_id)
        .bind(display_name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        map_subscriber(&row)
    }

    async fn set_subscribed(
        &self,
        recipient_id: i64,
        subscribed: bool,
    ) -> Result<Subscriber, StorageError> {
        let row = sqlx::query(&format!(
            r#"
                INSERT INTO subscribers (recipient_id, display_name, subscribed, created_at)
                VALUES (?, NULL, ?, ?)
                ON CONFLICT (recipient_id) DO UPDATE SET subscribed = excluded.subscribed
                RETURNING {SUBSCRIBER_COLUMNS}
            "#
        ))
        .bind(recipient_id)
        .bind(subscribed)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        map_subscriber(&row)
    }

    async fn list_subscribed(&self) -> Result<Vec<Subscriber>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE subscribed = 1"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_subscriber).collect()
    }

    async fn count_subscribed(&self) -> Result<i64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM subscribers WHERE subscribed = 1")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
