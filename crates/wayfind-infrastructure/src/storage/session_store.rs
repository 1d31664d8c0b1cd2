//! Persistent session cache.
//!
//! One JSON document holds the opaque token together with the user profile,
//! so the two are always written and cleared as a unit. A present pair at
//! process start is treated as evidence of an active session without
//! re-validating against the provider.

use std::path::PathBuf;

use tracing::warn;

use wayfind_core::auth::{Session, UserProfile};
use wayfind_core::error::{Result, WayfindError};

use crate::paths::WayfindPaths;
use crate::storage::atomic_json::{AtomicJsonError, AtomicJsonFile};

use serde::{Deserialize, Serialize};

/// On-disk shape of the persisted session.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
    profile: UserProfile,
}

/// File-backed store for the current session.
pub struct SessionStore {
    file: AtomicJsonFile<PersistedSession>,
}

impl SessionStore {
    /// Creates a store over the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates a store at the default location (`~/.config/wayfind/session.json`).
    pub fn default_location() -> Result<Self> {
        let path = WayfindPaths::session_file()
            .map_err(|e| WayfindError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    /// Reads the persisted session, if any.
    ///
    /// A corrupt or partial file is treated as no session rather than an
    /// error: the user simply has to log in again.
    pub fn load(&self) -> Result<Option<Session>> {
        match self.file.load() {
            Ok(Some(persisted)) => Ok(Some(Session::new(persisted.token, persisted.profile))),
            Ok(None) => Ok(None),
            Err(AtomicJsonError::JsonError(e)) => {
                warn!("Persisted session is unreadable, treating as logged out: {e}");
                Ok(None)
            }
            Err(e) => Err(storage_error(e)),
        }
    }

    /// Persists the session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        let persisted = PersistedSession {
            token: session.token.clone(),
            profile: session.profile.clone(),
        };
        self.file.save(&persisted).map_err(storage_error)
    }

    /// Removes the persisted session. Idempotent.
    pub fn clear(&self) -> Result<()> {
        self.file.remove().map_err(storage_error)
    }
}

fn storage_error(e: AtomicJsonError) -> WayfindError {
    match e {
        AtomicJsonError::IoError(io) => WayfindError::io(io.to_string()),
        AtomicJsonError::JsonError(json) => WayfindError::Serialization {
            format: "JSON".to_string(),
            message: json.to_string(),
        },
        AtomicJsonError::LockError(msg) => WayfindError::io(msg),
    }
}
