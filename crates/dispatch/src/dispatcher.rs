use common::models::Subscriber;
use futures_util::future;
use std::sync::Arc;
use tracing::{info, warn};

use crate::sender::{MessageSender, SendError};

#[derive(Debug)]
pub struct DeliveryFailure {
    pub recipient_id: i64,
    pub reason: SendError,
}

/// Outcome of one fan-out. Produced even when every delivery fails;
/// individual failures never surface as an error of the broadcast.
#[derive(Debug, Default)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub failed: Vec<DeliveryFailure>,
}

pub struct BroadcastDispatcher {
    sender: Arc<dyn MessageSender>,
}

impl BroadcastDispatcher {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// Delivers `message` to every recipient independently and
    /// concurrently. One recipient failing never aborts or blocks the
    /// others; each failure is recorded in the report instead.
    pub async fn broadcast(&self, message: &str, recipients: &[Subscriber]) -> BroadcastReport {
        let attempts = recipients.iter().map(|subscriber| {
            let id = subscriber.recipient_id;
            let sender = Arc::clone(&self.sender);
            async move { (id, sender.send_text(id, message).await) }
        });

        let results = future::join_all(attempts).await;

        let mut report = BroadcastReport::default();
        for (recipient_id, result) in results {
            match result {
                Ok(()) => report.delivered += 1,
                Err(reason) => {
                    warn!("Delivery to {} failed: {}", recipient_id, reason);
                    report.failed.push(DeliveryFailure {
                        recipient_id,
                        reason,
                    });
                }
            }
        }

        info!(
            "Broadcast complete: {} delivered, {} failed",
            report.delivered,
            report.failed.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::MockMessageSender;
    use chrono::Utc;

    fn subscriber(recipient_id: i64) -> Subscriber {
        Subscriber {
            recipient_id,
            display_name: None,
            subscribed: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn one_failure_does_not_block_the_others() {
        let mut sender = MockMessageSender::new();
        sender
            .expect_send_text()
            .times(3)
            .returning(|id, _| match id {
                2 => Err(SendError::RecipientUnreachable("bot blocked".to_string())),
                _ => Ok(()),
            });

        let dispatcher = BroadcastDispatcher::new(Arc::new(sender));
        let recipients = vec![subscriber(1), subscriber(2), subscriber(3)];

        let report = dispatcher.broadcast("hello", &recipients).await;

        assert_eq!(report.delivered, 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].recipient_id, 2);
        assert!(matches!(
            report.failed[0].reason,
            SendError::RecipientUnreachable(_)
        ));
    }

    #[tokio::test]
    async fn total_failure_still_yields_a_report() {
        let mut sender = MockMessageSender::new();
        sender
            .expect_send_text()
            .times(2)
            .returning(|_, _| Err(SendError::Transport("connection reset".to_string())));

        let dispatcher = BroadcastDispatcher::new(Arc::new(sender));
        let report = dispatcher
            .broadcast("hello", &[subscriber(1), subscriber(2)])
            .await;

        assert_eq!(report.delivered, 0);
        assert_eq!(report.failed.len(), 2);
    }

    #[tokio::test]
    async fn empty_audience_is_a_noop() {
        let mut sender = MockMessageSender::new();
        sender.expect_send_text().times(0);

        let dispatcher = BroadcastDispatcher::new(Arc::new(sender));
        let report = dispatcher.broadcast("hello", &[]).await;

        assert_eq!(report.delivered, 0);
        assert!(report.failed.is_empty());
    }
}
