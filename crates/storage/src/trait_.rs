//! Session store trait abstraction.

use async_trait::async_trait;
use workforce_core::{ClientState, Preferences, Session};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Persistent client state: the signed-in session and UI preferences.
///
/// Replaces ambient browser storage with an object that callers inject.
#[async_trait]
pub trait SessionStore: Send + Sync {
    // === Session operations ===

    /// Load the stored session, expired or not.
    async fn load_session(&self) -> Result<Option<Session>>;

    /// Save the session (sign-in or token refresh).
    async fn save_session(&mut self, session: &Session) -> Result<()>;

    /// Remove the stored session. Succeeds when none is stored.
    async fn clear_session(&mut self) -> Result<()>;

    // === Preference operations ===

    /// Load preferences, falling back to defaults.
    async fn load_preferences(&self) -> Result<Preferences>;

    /// Save preferences.
    async fn save_preferences(&mut self, preferences: &Preferences) -> Result<()>;

    // === Start-up ===

    /// Load everything the client restores at start-up.
    ///
    /// An expired session is reported as absent but left in place.
    async fn load_state(&self) -> Result<ClientState> {
        let session = match self.load_session().await? {
            Some(session) if session.is_expired() => {
                tracing::info!("Stored session {} has expired", session.id);
                None
            }
            other => other,
        };
        Ok(ClientState {
            session,
            preferences: self.load_preferences().await?,
        })
    }

    /// Load the active session, failing when signed out or expired.
    async fn require_session(&self) -> Result<Session> {
        self.load_state()
            .await?
            .session
            .ok_or_else(|| StorageError::NotFound("active session".to_string()))
    }
}
