//! Session identity
//!
//! An anonymous, opaque token created once per storage location and used to
//! scope reservation queries. There is no expiry or rotation.
//!
//! The token is passed explicitly into gateway calls as a [`SessionId`];
//! nothing reads it from global state.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name inside the storage directory
pub const SESSION_FILE_NAME: &str = "goodfoods_session_id.json";

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque session token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `session_<unix-millis>_<9 base36 chars>`
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..9)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("session_{}_{}", Utc::now().timestamp_millis(), suffix))
    }

    /// Scope used when no token is available
    pub fn fallback() -> Self {
        Self(shared::DEFAULT_SESSION_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Where the token lives between runs
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<SessionId>, SessionError>;
    fn save(&self, session: &SessionId) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// On-disk record
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    session_id: SessionId,
    created_at: DateTime<Utc>,
}

/// JSON file storage, one file per profile directory
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self::with_file_name(base_path, SESSION_FILE_NAME)
    }

    pub fn with_file_name(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            path: base_path.into().join(filename),
        }
    }

    /// 确保目录存在
    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<SessionId>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let stored: StoredSession = serde_json::from_str(&json)?;
        Ok(Some(stored.session_id))
    }

    fn save(&self, session: &SessionId) -> Result<(), SessionError> {
        self.ensure_dir()?;
        let stored = StoredSession {
            session_id: session.clone(),
            created_at: Utc::now(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-process storage, lost on exit
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<SessionId>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SessionId>, SessionError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, session: &SessionId) -> Result<(), SessionError> {
        *self.slot.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot.lock() = None;
        Ok(())
    }
}

/// Lazily creates and persists the session token
#[derive(Debug)]
pub struct SessionProvider<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionProvider<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the token, creating and persisting one on first use.
    ///
    /// A corrupt record is replaced by a fresh token.
    pub fn session_id(&self) -> Result<SessionId, SessionError> {
        match self.store.load() {
            Ok(Some(existing)) => return Ok(existing),
            Ok(None) => {}
            Err(SessionError::Corrupt(e)) => {
                tracing::warn!(error = %e, "Discarding corrupt session record");
            }
            Err(e) => return Err(e),
        }

        let session = SessionId::generate();
        self.store.save(&session)?;
        tracing::info!(session_id = %session, "Created new session");
        Ok(session)
    }

    /// Forget the token; the next read creates a new one
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.clear()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
