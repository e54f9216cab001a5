use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity attached to a signed-in session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Opaque identifier assigned by the identity provider
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl AuthUser {
    /// Label for the user-name surface: the display name when the provider
    /// supplied one, otherwise the account email.
    pub fn display_label(&self) -> Option<&str> {
        self.display_name.as_deref().or(self.email.as_deref())
    }
}

/// One observed authentication-state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    SignedOut,
    SignedIn(AuthUser),
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::SignedOut => None,
        }
    }
}

/// Sign-in method selected by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Credentials {
    Google,
    EmailPassword { email: String, password: String },
}

/// Measurement system used to render weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

/// A single weight-log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub weight_kg: f64,
    pub note: Option<String>,
}

/// Per-user dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub units: Units,
    pub height_cm: Option<f64>,
    pub reminders_enabled: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            units: Units::Metric,
            height_cm: None,
            reminders_enabled: false,
        }
    }
}

/// The user's target, shown alongside the weight chart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Goals {
    pub target_weight_kg: Option<f64>,
    pub target_date: Option<DateTime<Utc>>,
}

/// The complete record set fetched for a signed-in session.
///
/// Members are fetched concurrently and combined only so they can be
/// propagated and logged together; nothing caches the set after the UI
/// hooks have seen it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecordSet {
    pub weight_log: Vec<WeightEntry>,
    pub settings: UserSettings,
    pub goals: Goals,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(display_name: Option<&str>, email: Option<&str>) -> AuthUser {
        AuthUser {
            uid: "uid-1".to_string(),
            email: email.map(String::from),
            display_name: display_name.map(String::from),
        }
    }

    #[test]
    fn test_display_label_prefers_display_name() {
        let user = user(Some("Jana"), Some("jana@example.com"));
        assert_eq!(user.display_label(), Some("Jana"));
    }

    #[test]
    fn test_display_label_falls_back_to_email() {
        let user = user(None, Some("jana@example.com"));
        assert_eq!(user.display_label(), Some("jana@example.com"));
    }

    #[test]
    fn test_display_label_absent() {
        assert_eq!(user(None, None).display_label(), None);
    }

    #[test]
    fn test_session_state_accessors() {
        let signed_in = SessionState::SignedIn(user(None, Some("jana@example.com")));
        assert!(signed_in.is_signed_in());
        assert_eq!(signed_in.user().map(|u| u.uid.as_str()), Some("uid-1"));

        assert!(!SessionState::SignedOut.is_signed_in());
        assert!(SessionState::SignedOut.user().is_none());
    }

    #[test]
    fn test_session_state_serializes_with_tag() {
        let json = serde_json::to_value(SessionState::SignedOut).expect("should serialize");
        assert_eq!(json["state"], "signed_out");

        let json = serde_json::to_value(SessionState::SignedIn(user(None, None)))
            .expect("should serialize");
        assert_eq!(json["state"], "signed_in");
        assert_eq!(json["uid"], "uid-1");
    }
}
