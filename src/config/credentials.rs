//! Credential storage with restricted file permissions
//!
//! Tokens are stored in `~/.qspin/credentials.json` with 0600 permissions
//! (owner read/write only). A missing file means "no session", not an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stored access/refresh token pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Credentials {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// File-backed credential store.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            path: config_dir.join("credentials.json"),
        }
    }

    /// Load credentials from storage. A missing file yields empty credentials.
    pub fn load(&self) -> Result<Credentials> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Credentials::default())
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to read credentials file {}", self.path.display())
                })
            }
        };
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse credentials file {}", self.path.display()))
    }

    /// Save credentials with secure permissions.
    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("credentials path has no parent directory")?;
        std::fs::create_dir_all(dir).context("failed to create credentials directory")?;

        let content = serde_json::to_string_pretty(credentials)?;

        // Write to temp file first, then rename (atomic)
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content).context("failed to write temp credentials file")?;

        // 0600 = owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&temp_path, perms)
                .context("failed to set credentials file permissions")?;
        }

        std::fs::rename(&temp_path, &self.path).context("failed to save credentials file")?;

        tracing::debug!("saved credentials to {}", self.path.display());
        Ok(())
    }

    /// Delete stored credentials. A missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("cleared credentials at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!("failed to remove credentials file {}", self.path.display())
            }),
        }
    }

    /// Check whether a credentials file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn missing_file_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let creds = store(&dir).load().unwrap();
        assert!(creds.is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store
            .save(&Credentials {
                access_token: Some("at".into()),
                refresh_token: Some("rt".into()),
            })
            .unwrap();

        let creds = store.load().unwrap();
        assert_eq!(creds.access_token.as_deref(), Some("at"));
        assert_eq!(creds.refresh_token.as_deref(), Some("rt"));
    }

    #[cfg(unix)]
    #[test]
    fn credentials_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.save(&Credentials::default()).unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store.clear().unwrap();
        store
            .save(&Credentials {
                access_token: Some("at".into()),
                refresh_token: None,
            })
            .unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
    }
}
