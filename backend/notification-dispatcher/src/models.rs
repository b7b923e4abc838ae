use serde::Deserialize;

/// Event published when a chat message document is created.
///
/// Field names follow the message writer's document schema (camelCase).
/// Unknown fields are ignored; the dispatcher only cares about the two
/// participant ids.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCreatedEvent {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub receiver_id: Option<String>,
}

impl MessageCreatedEvent {
    /// Both participant ids, or `None` when either is absent or empty.
    pub fn participant_ids(&self) -> Option<(&str, &str)> {
        let sender = self.sender_id.as_deref().filter(|s| !s.is_empty())?;
        let receiver = self.receiver_id.as_deref().filter(|s| !s.is_empty())?;
        Some((sender, receiver))
    }
}

/// User profile row, read-only to this service
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct UserProfile {
    pub display_name: Option<String>,
    pub fcm_token: Option<String>,
    pub lang: Option<String>,
}

/// Localized push payload, built and discarded per event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

/// What happened to one event. Skips are expected behavior, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    SkippedMissingIds,
    SkippedReceiverMissing,
    SkippedNoToken,
    Failed,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Sent => "sent",
            DispatchOutcome::SkippedMissingIds => "skipped_missing_ids",
            DispatchOutcome::SkippedReceiverMissing => "skipped_receiver_missing",
            DispatchOutcome::SkippedNoToken => "skipped_no_token",
            DispatchOutcome::Failed => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserialization() {
        let event: MessageCreatedEvent = serde_json::from_str(
            r#"{"messageId":"m1","senderId":"u1","receiverId":"u2","text":"hi"}"#,
        )
        .unwrap();

        assert_eq!(event.message_id.as_deref(), Some("m1"));
        assert_eq!(event.participant_ids(), Some(("u1", "u2")));
    }

    #[test]
    fn test_event_with_missing_fields() {
        let event: MessageCreatedEvent = serde_json::from_str(r#"{"senderId":"u1"}"#).unwrap();
        assert_eq!(event.participant_ids(), None);

        let event: MessageCreatedEvent = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(event.participant_ids(), None);
    }

    #[test]
    fn test_event_with_null_ids() {
        let event: MessageCreatedEvent =
            serde_json::from_str(r#"{"senderId":null,"receiverId":"u2"}"#).unwrap();
        assert_eq!(event.participant_ids(), None);
    }

    #[test]
    fn test_event_with_empty_ids() {
        let event: MessageCreatedEvent =
            serde_json::from_str(r#"{"senderId":"","receiverId":"u2"}"#).unwrap();
        assert_eq!(event.participant_ids(), None);

        let event: MessageCreatedEvent =
            serde_json::from_str(r#"{"senderId":"u1","receiverId":""}"#).unwrap();
        assert_eq!(event.participant_ids(), None);
    }

    #[test]
    fn test_dispatch_outcome_as_str() {
        assert_eq!(DispatchOutcome::Sent.as_str(), "sent");
        assert_eq!(DispatchOutcome::SkippedMissingIds.as_str(), "skipped_missing_ids");
        assert_eq!(
            DispatchOutcome::SkippedReceiverMissing.as_str(),
            "skipped_receiver_missing"
        );
        assert_eq!(DispatchOutcome::SkippedNoToken.as_str(), "skipped_no_token");
        assert_eq!(DispatchOutcome::Failed.as_str(), "failed");
    }
}
