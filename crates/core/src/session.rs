//! Client session and preference models.

use serde::{Deserialize, Serialize};
use crate::error::AccessError;
use crate::id::{SessionId, TenantId, UserId};
use crate::role::{is_admin_role, to_ui_role};
use crate::Time;

/// An authenticated client session issued by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: SessionId,

    /// Signed-in user
    pub user_id: UserId,

    /// Tenant the user belongs to
    pub tenant_id: TenantId,

    /// Role as issued by the backend
    pub role: String,

    /// Bearer token
    pub token: String,

    /// When the session was issued
    pub issued_at: Time,

    /// When the session stops being valid
    pub expires_at: Option<Time>,
}

impl Session {
    /// Create a session issued now.
    pub fn new(
        user_id: UserId,
        tenant_id: TenantId,
        role: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            user_id,
            tenant_id,
            role: role.into(),
            token: token.into(),
            issued_at: chrono::Utc::now(),
            expires_at: None,
        }
    }

    /// Set the lifetime relative to the issue time.
    ///
    /// The lifetime must be positive and the expiry must be representable.
    pub fn with_ttl(mut self, ttl: chrono::Duration) -> crate::Result<Self> {
        if ttl <= chrono::Duration::zero() {
            return Err(AccessError::InvalidTtl(format!("{} is not positive", ttl)));
        }
        let expires_at = self
            .issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| AccessError::InvalidTtl(format!("{} overflows the expiry date", ttl)))?;
        self.expires_at = Some(expires_at);
        Ok(self)
    }

    /// Set the lifetime in whole hours.
    pub fn with_ttl_hours(self, hours: i64) -> crate::Result<Self> {
        let ttl = chrono::Duration::try_hours(hours)
            .ok_or_else(|| AccessError::InvalidTtl(format!("{} hours is out of range", hours)))?;
        self.with_ttl(ttl)
    }

    /// Whether the session has expired at the given instant.
    pub fn is_expired_at(&self, now: Time) -> bool {
        self.expires_at.is_some_and(|expires| expires <= now)
    }

    /// Whether the session has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now())
    }

    /// Role in the UI vocabulary.
    pub fn ui_role(&self) -> String {
        to_ui_role(Some(&self.role))
    }

    /// Whether the session user administers the tenant.
    pub fn is_admin(&self) -> bool {
        is_admin_role(Some(&self.role))
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette
    Light,
    /// Dark palette
    Dark,
    /// Follow the operating system
    #[default]
    System,
}

impl Theme {
    /// Theme name.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Per-device UI preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Color theme
    pub theme: Theme,
}

/// Everything the client restores at start-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    /// Active session, if signed in
    pub session: Option<Session>,

    /// UI preferences
    pub preferences: Preferences,
}
