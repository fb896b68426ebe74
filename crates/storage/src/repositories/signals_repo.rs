use async_trait::async_trait;
use chrono::Utc;
use common::models::{Signal, SignalInsert};
use sqlx::sqlite::SqlitePool;

use crate::error::StorageError;
use crate::traits::SignalStore;

pub struct SignalRepository {
    pool: SqlitePool,
}

impl SignalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignalStore for SignalRepository {
    async fn save(&self, signal: SignalInsert) -> Result<Signal, StorageError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
                INSERT INTO signals (
                    asset, direction, entry_price, confidence, stop_loss,
                    take_profit1, take_profit2, take_profit3, risk_reward, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&signal.asset)
        .bind(signal.direction.as_str())
        .bind(signal.entry_price)
        .bind(signal.confidence.as_str())
        .bind(signal.stop_loss)
        .bind(signal.take_profit1)
        .bind(signal.take_profit2)
        .bind(signal.take_profit3)
        .bind(&signal.risk_reward)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Signal {
            id: result.last_insert_rowid(),
            asset: signal.asset,
            direction: signal.direction,
            entry_price: signal.entry_price,
            confidence: signal.confidence,
            stop_loss: signal.stop_loss,
            take_profit1: signal.take_profit1,
            take_profit2: signal.take_profit2,
            take_profit3: signal.take_profit3,
            risk_reward: signal.risk_reward,
            created_at,
        })
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM signals")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use common::models::{Confidence, Direction};

    fn insert() -> SignalInsert {
        SignalInsert {
            asset: "BTC/USDT".to_string(),
            direction: Direction::Long,
            entry_price: 50000.0,
            confidence: Confidence::High,
            stop_loss: 49000.0,
            take_profit1: 50500.0,
            take_profit2: 51000.0,
            take_profit3: 51500.0,
            risk_reward: "1:2.5".to_string(),
        }
    }

    #[tokio::test]
    async fn save_assigns_id_and_timestamp() {
        let repo = SignalRepository::new(test_pool().await);

        let saved = repo.save(insert()).await.unwrap();
        assert!(saved.id > 0);
        assert_eq!(saved.asset, "BTC/USDT");
        assert_eq!(saved.direction, Direction::Long);

        let second = repo.save(insert()).await.unwrap();
        assert!(second.id > saved.id);
    }

    #[tokio::test]
    async fn count_reflects_appends() {
        let repo = SignalRepository::new(test_pool().await);
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.save(insert()).await.unwrap();
        repo.save(insert()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
