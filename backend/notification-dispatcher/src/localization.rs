use crate::models::UserProfile;

/// Display name used when the sender profile is missing or has no name.
/// Used verbatim in both language branches.
pub const FALLBACK_SENDER_NAME: &str = "Biri";

/// Notification language. A hardcoded two-way choice: Turkish, and English
/// for every other language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Turkish,
    English,
}

impl Lang {
    /// Resolve a profile's language code. Absent or empty codes default to
    /// Turkish.
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            None | Some("") | Some("tr") => Lang::Turkish,
            Some(_) => Lang::English,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Lang::Turkish => "📩 Yeni Mesaj",
            Lang::English => "📩 New Message",
        }
    }

    pub fn body(&self, sender_name: &str) -> String {
        match self {
            Lang::Turkish => format!("{sender_name} kullanıcısından bir mesaj var"),
            Lang::English => format!("You have a new message from {sender_name}"),
        }
    }
}

/// Sender name shown in the notification body, falling back to
/// [`FALLBACK_SENDER_NAME`] when the profile is missing or unnamed.
pub fn sender_display_name(profile: Option<&UserProfile>) -> &str {
    profile
        .and_then(|p| p.display_name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_SENDER_NAME)
}
