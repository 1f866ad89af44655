//! JSON file session store.
//!
//! Keeps `session.json` and `preferences.json` under a root directory, plus
//! small per-file meta markers (version + updated_at) in `meta/`.

use std::path::{Path, PathBuf};
use workforce_core::{Preferences, Session};
use super::{Result, SessionStore, StorageError};
use tokio::fs;
use tracing::debug;

const SESSION_FILE: &str = "session";
const PREFERENCES_FILE: &str = "preferences";

/// File-based JSON session store.
pub struct JsonSessionStore {
    root: PathBuf,
}

impl JsonSessionStore {
    /// Create the store, creating the root and `meta/` directories as needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        if fs::metadata(&root).await.is_ok_and(|m| !m.is_dir()) {
            return Err(StorageError::Other(format!(
                "{} exists and is not a directory",
                root.display()
            )));
        }

        fs::create_dir_all(root.join("meta")).await?;
        debug!("Opened session store at {}", root.display());

        Ok(Self { root })
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    fn meta_path(&self, name: &str) -> PathBuf {
        self.root.join("meta").join(format!("{}.meta.json", name))
    }

    /// Current write version of a file, 0 if never written.
    pub async fn version(&self, name: &str) -> Result<u64> {
        let meta: Option<serde_json::Value> = read_json(&self.meta_path(name)).await?;
        Ok(meta
            .and_then(|m| m.get("version").and_then(|v| v.as_u64()))
            .unwrap_or(0))
    }

    /// Read and increment the per-file version, return new version.
    async fn bump_version(&self, name: &str) -> Result<u64> {
        let version = self.version(name).await? + 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(self.meta_path(name), serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(version)
    }

    async fn write_json<T: serde::Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.data_path(name), json.as_bytes()).await?;
        let version = self.bump_version(name).await?;
        debug!("Saved {} (version {})", name, version);
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for JsonSessionStore {
    async fn load_session(&self) -> Result<Option<Session>> {
        read_json(&self.data_path(SESSION_FILE)).await
    }

    async fn save_session(&mut self, session: &Session) -> Result<()> {
        self.write_json(SESSION_FILE, session).await
    }

    async fn clear_session(&mut self) -> Result<()> {
        fs::remove_file(self.data_path(SESSION_FILE)).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        self.bump_version(SESSION_FILE).await?;
        debug!("Cleared session");
        Ok(())
    }

    async fn load_preferences(&self) -> Result<Preferences> {
        Ok(read_json(&self.data_path(PREFERENCES_FILE)).await?.unwrap_or_default())
    }

    async fn save_preferences(&mut self, preferences: &Preferences) -> Result<()> {
        self.write_json(PREFERENCES_FILE, preferences).await
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
