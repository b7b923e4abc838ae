use std::sync::Arc;

use async_trait::async_trait;
use mesaj_fcm_shared::FcmClient;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::NotificationContent;

/// Outbound push delivery
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(&self, device_token: &str, content: &NotificationContent) -> AppResult<()>;
}

/// FCM-backed push gateway
pub struct FcmPushGateway {
    client: Arc<FcmClient>,
}

impl FcmPushGateway {
    pub fn new(client: Arc<FcmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PushGateway for FcmPushGateway {
    async fn send(&self, device_token: &str, content: &NotificationContent) -> AppResult<()> {
        let result = self
            .client
            .send(device_token, &content.title, &content.body, None)
            .await?;
        debug!("FCM delivery successful: {}", result.message_id);
        Ok(())
    }
}

/// Gateway used when no FCM credentials are configured. Notifications are
/// dropped with a warning.
pub struct DisabledPushGateway;

#[async_trait]
impl PushGateway for DisabledPushGateway {
    async fn send(&self, _device_token: &str, _content: &NotificationContent) -> AppResult<()> {
        warn!("FCM client not configured - dropping push notification");
        Ok(())
    }
}
