use std::sync::Arc;

use tracing::error;

use crate::error::AppResult;
use crate::localization::{sender_display_name, Lang};
use crate::metrics;
use crate::models::{DispatchOutcome, MessageCreatedEvent, NotificationContent};
use crate::services::profile_store::ProfileStore;
use crate::services::push_gateway::PushGateway;

/// Dispatches one push notification per created chat message.
///
/// The flow is linear with early-return guards: resolve the receiver's
/// profile, then the sender's, pick the receiver's language, and deliver to
/// the receiver's device token when one is registered. `handle_event` is
/// the single error boundary: failures are logged and counted, never
/// propagated, so the event source never redelivers on a failed dispatch.
pub struct NotificationDispatcher {
    profiles: Arc<dyn ProfileStore>,
    gateway: Arc<dyn PushGateway>,
}

impl NotificationDispatcher {
    pub fn new(profiles: Arc<dyn ProfileStore>, gateway: Arc<dyn PushGateway>) -> Self {
        Self { profiles, gateway }
    }

    /// Handle one `MessageCreated` event. Always completes.
    pub async fn handle_event(&self, event: MessageCreatedEvent) -> DispatchOutcome {
        let Some((sender_id, receiver_id)) = event.participant_ids() else {
            metrics::record_outcome(DispatchOutcome::SkippedMissingIds);
            return DispatchOutcome::SkippedMissingIds;
        };

        let outcome = match self.dispatch(sender_id, receiver_id).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("failed to deliver chat notification: {err}");
                DispatchOutcome::Failed
            }
        };

        metrics::record_outcome(outcome);
        outcome
    }

    async fn dispatch(&self, sender_id: &str, receiver_id: &str) -> AppResult<DispatchOutcome> {
        let Some(receiver) = self.profiles.fetch(receiver_id).await? else {
            return Ok(DispatchOutcome::SkippedReceiverMissing);
        };

        // Sender lookup is best-effort: a missing profile degrades to the
        // fallback display name.
        let sender = self.profiles.fetch(sender_id).await?;

        let lang = Lang::from_code(receiver.lang.as_deref());
        let sender_name = sender_display_name(sender.as_ref());

        let Some(token) = receiver.fcm_token.as_deref().filter(|t| !t.is_empty()) else {
            return Ok(DispatchOutcome::SkippedNoToken);
        };

        let content = NotificationContent {
            title: lang.title().to_string(),
            body: lang.body(sender_name),
        };

        self.gateway.send(token, &content).await?;

        Ok(DispatchOutcome::Sent)
    }
}
