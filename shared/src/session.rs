use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

/// A user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub uid: String,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            is_anonymous: false,
            display_name: None,
            email: None,
        }
    }

    pub fn anonymous(uid: impl Into<String>) -> Self {
        Self {
            is_anonymous: true,
            ..Self::new(uid)
        }
    }

    /// Name to show in the UI, falling back to the email and then the uid.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

// ============================================================================
// Session snapshots
// ============================================================================

/// Point-in-time view of the provider's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSnapshot {
    Absent,
    Anonymous(Identity),
    Authenticated(Identity),
}

impl SessionSnapshot {
    pub fn from_user(user: Option<Identity>) -> Self {
        match user {
            None => SessionSnapshot::Absent,
            Some(identity) if identity.is_anonymous => SessionSnapshot::Anonymous(identity),
            Some(identity) => SessionSnapshot::Authenticated(identity),
        }
    }

    /// Parse the JSON user object handed over by the browser bridge
    /// (`null` means nobody is signed in).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let user: Option<Identity> = serde_json::from_str(json)?;
        Ok(Self::from_user(user))
    }

    /// True only for a real, non-anonymous user.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionSnapshot::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionSnapshot::Absent => None,
            SessionSnapshot::Anonymous(identity) | SessionSnapshot::Authenticated(identity) => {
                Some(identity)
            }
        }
    }

    pub fn into_identity(self) -> Option<Identity> {
        match self {
            SessionSnapshot::Absent => None,
            SessionSnapshot::Anonymous(identity) | SessionSnapshot::Authenticated(identity) => {
                Some(identity)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionSnapshot::Absent => "absent",
            SessionSnapshot::Anonymous(_) => "anonymous",
            SessionSnapshot::Authenticated(_) => "authenticated",
        }
    }
}
