//! In-memory session store.

use workforce_core::{Preferences, Session};
use super::{Result, SessionStore};

/// Session store that keeps state for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Option<Session>,
    preferences: Preferences,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn load_session(&self) -> Result<Option<Session>> {
        Ok(self.session.clone())
    }

    async fn save_session(&mut self, session: &Session) -> Result<()> {
        self.session = Some(session.clone());
        Ok(())
    }

    async fn clear_session(&mut self) -> Result<()> {
        self.session = None;
        Ok(())
    }

    async fn load_preferences(&self) -> Result<Preferences> {
        Ok(self.preferences.clone())
    }

    async fn save_preferences(&mut self, preferences: &Preferences) -> Result<()> {
        self.preferences = preferences.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workforce_core::{TenantId, Theme, UserId};

    #[tokio::test]
    async fn test_memory_store_contract() {
        let mut store = MemorySessionStore::new();
        assert!(store.load_state().await.unwrap().session.is_none());

        let session = Session::new(UserId::new("u-9"), TenantId::new("globex"), "admin", "t");
        store.save_session(&session).await.unwrap();
        store
            .save_preferences(&Preferences { theme: Theme::Light })
            .await
            .unwrap();

        let state = store.load_state().await.unwrap();
        assert_eq!(state.session, Some(session));
        assert_eq!(state.preferences.theme, Theme::Light);

        store.clear_session().await.unwrap();
        store.clear_session().await.unwrap();
        assert!(store.require_session().await.is_err());
    }
}
