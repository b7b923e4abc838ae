use std::sync::Arc;

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::metrics;
use crate::models::MessageCreatedEvent;
use crate::services::dispatcher::NotificationDispatcher;

/// Kafka consumer for `MessageCreated` events
pub struct MessageEventConsumer {
    pub brokers: String,
    pub topic: String,
    pub group_id: String,
}

impl MessageEventConsumer {
    pub fn new(brokers: String, topic: String, group_id: String) -> Self {
        Self {
            brokers,
            topic,
            group_id,
        }
    }

    /// Consume events until the process exits, dispatching one notification
    /// per parsed event.
    ///
    /// `handle_event` never fails, so offsets auto-commit and an event is
    /// never redelivered by this service. Payloads that do not parse as a
    /// `MessageCreatedEvent` are logged and skipped.
    pub async fn start(&self, dispatcher: Arc<NotificationDispatcher>) -> AppResult<()> {
        info!(
            "Starting Kafka consumer for broker: {}, topic: {}",
            self.brokers, self.topic
        );

        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &self.brokers)
            .set("group.id", &self.group_id)
            .set("auto.offset.reset", "latest")
            .set("enable.auto.commit", "true")
            .set("session.timeout.ms", "30000")
            .set("heartbeat.interval.ms", "10000")
            .create()
            .map_err(|e| AppError::Kafka(format!("Failed to create Kafka consumer: {}", e)))?;

        consumer
            .subscribe(&[self.topic.as_str()])
            .map_err(|e| AppError::Kafka(format!("Failed to subscribe to {}: {}", self.topic, e)))?;

        info!("Subscribed to topic: {}", self.topic);

        loop {
            match consumer.recv().await {
                Ok(m) => {
                    let Some(payload) = m.payload() else { continue };
                    metrics::event_consumed();

                    match serde_json::from_slice::<MessageCreatedEvent>(payload) {
                        Ok(event) => {
                            dispatcher.handle_event(event).await;
                        }
                        Err(e) => {
                            warn!("Failed to parse message event: {}", e);
                        }
                    }
                }
                Err(e) => {
                    warn!("Kafka consumer error: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_creation() {
        let consumer = MessageEventConsumer::new(
            "localhost:9092".to_string(),
            "MessageCreated".to_string(),
            "notification-dispatcher".to_string(),
        );

        assert_eq!(consumer.brokers, "localhost:9092");
        assert_eq!(consumer.topic, "MessageCreated");
        assert_eq!(consumer.group_id, "notification-dispatcher");
    }
}
