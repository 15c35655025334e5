//! Session-backed authentication.
//!
//! A session is stored as YAML next to the rest of the user's data:
//!
//! ```text
//! access_token: eyJ...
//! expires_at: 2026-10-16T12:00:00Z
//! profile:
//!   sub: auth0|5a1b
//!   name: Sam
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::UserProfile;
use crate::services::AuthService;

/// Errors that can occur while reading or writing the session file
#[derive(Debug)]
pub enum AuthError {
    /// I/O error
    IoError(PathBuf, std::io::Error),
    /// Session file could not be parsed or written as YAML
    FormatError(PathBuf, serde_yaml::Error),
    /// Expiry lies beyond what a timestamp can hold
    ExpiryOutOfRange(i64),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::IoError(path, e) => {
                write!(f, "Failed to access session file '{}': {}", path.display(), e)
            }
            AuthError::FormatError(path, e) => {
                write!(f, "Invalid session file '{}': {}", path.display(), e)
            }
            AuthError::ExpiryOutOfRange(secs) => {
                write!(f, "Session expiry of {} seconds is too large", secs)
            }
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::IoError(_, e) => Some(e),
            AuthError::FormatError(_, e) => Some(e),
            AuthError::ExpiryOutOfRange(_) => None,
        }
    }
}

/// A signed-in user's token and profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub profile: UserProfile,
}

impl Session {
    /// Creates a session that expires `expires_in_secs` seconds from now.
    pub fn new(
        access_token: impl Into<String>,
        expires_in_secs: i64,
        profile: UserProfile,
    ) -> Result<Self, AuthError> {
        let expires_at = TimeDelta::try_seconds(expires_in_secs)
            .and_then(|delta| Utc::now().checked_add_signed(delta))
            .ok_or(AuthError::ExpiryOutOfRange(expires_in_secs))?;

        Ok(Self {
            access_token: access_token.into(),
            expires_at,
            profile,
        })
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn read(path: &Path) -> Result<Option<Self>, AuthError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AuthError::IoError(path.to_path_buf(), e))?;
        let session = serde_yaml::from_str(&contents)
            .map_err(|e| AuthError::FormatError(path.to_path_buf(), e))?;
        Ok(Some(session))
    }

    pub fn save(&self, path: &Path) -> Result<(), AuthError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AuthError::IoError(parent.to_path_buf(), e))?;
        }
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AuthError::FormatError(path.to_path_buf(), e))?;
        std::fs::write(path, yaml).map_err(|e| AuthError::IoError(path.to_path_buf(), e))
    }
}

/// [`AuthService`] backed by the session file.
#[derive(Debug, Clone)]
pub struct SessionAuth {
    path: PathBuf,
    session: Option<Session>,
}

impl SessionAuth {
    /// Loads the session stored at `path`.
    ///
    /// A missing file means nobody is signed in. A corrupt file is logged
    /// and treated the same way.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = match Session::read(&path) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session: {}", e);
                None
            }
        };
        Self { path, session }
    }

    pub fn with_session(path: impl Into<PathBuf>, session: Session) -> Self {
        Self {
            path: path.into(),
            session: Some(session),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Token to send with API requests, only while the session is valid.
    pub fn access_token(&self) -> Option<&str> {
        self.session
            .as_ref()
            .filter(|s| !s.is_expired())
            .map(|s| s.access_token.as_str())
    }

    /// Stores `session` and makes it the current one.
    pub fn sign_in(&mut self, session: Session) -> Result<(), AuthError> {
        session.save(&self.path)?;
        self.session = Some(session);
        Ok(())
    }

    /// Forgets the current session. Returns false if there was none on disk.
    pub fn clear(&mut self) -> Result<bool, AuthError> {
        self.session = None;
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path).map_err(|e| AuthError::IoError(self.path.clone(), e))?;
        Ok(true)
    }
}

impl AuthService for SessionAuth {
    fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.is_expired())
    }

    fn user_profile(&self) -> Option<UserProfile> {
        self.session.as_ref().map(|s| s.profile.clone())
    }
}
