//! On-disk token cache handling

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// One entry of the authenticator's on-disk token cache.
///
/// The cache is an artifact of the auth library; fields are kept loose and
/// validated only far enough to tell a usable file from a corrupt one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedCredential {
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Access/refresh token pair plus expiry metadata, kept opaque.
    #[serde(default)]
    pub token: serde_json::Value,
}

/// Outcome of inspecting the cache file before authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No usable cache; the interactive flow will run.
    Missing,
    /// A decodable cache exists and will be reused.
    Cached,
}

/// Owns the token cache file used by the authenticator.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inspect the cache file. A present-but-corrupt file is removed so the
    /// authenticator falls back to the interactive flow instead of failing
    /// on it; absence and corruption are equivalent triggers.
    pub async fn prepare(&self) -> Result<CacheState> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(CacheState::Missing),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<CachedCredential>>(&content) {
            Ok(entries) => {
                debug!("Token cache holds {} credential(s)", entries.len());
                Ok(CacheState::Cached)
            }
            Err(e) => {
                warn!("Discarding corrupt token cache {:?}: {}", self.path, e);
                tokio::fs::remove_file(&self.path).await?;
                Ok(CacheState::Missing)
            }
        }
    }

    /// 0600 on Unix; the cached token grants full mailbox access.
    #[cfg(unix)]
    pub async fn secure(&self) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = tokio::fs::metadata(&self.path).await?.permissions();
        perms.set_mode(0o600);
        tokio::fs::set_permissions(&self.path, perms).await?;
        Ok(())
    }

    /// Windows uses ACLs instead of Unix permissions; nothing to do here.
    #[cfg(windows)]
    pub async fn secure(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_prepare_missing_cache() {
        let dir = tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));

        assert_eq!(store.prepare().await.unwrap(), CacheState::Missing);
    }

    #[tokio::test]
    async fn test_prepare_valid_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token.json");
        let cache = r#"[{
            "scopes": ["https://mail.google.com/"],
            "token": {"access_token": "abc", "refresh_token": "def"}
        }]"#;
        tokio::fs::write(&path, cache).await.unwrap();

        let store = TokenStore::new(&path);
        assert_eq!(store.prepare().await.unwrap(), CacheState::Cached);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_prepare_discards_corrupt_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();

        let store = TokenStore::new(&path);
        assert_eq!(store.prepare().await.unwrap(), CacheState::Missing);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_prepare_discards_wrong_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token.json");
        tokio::fs::write(&path, r#"{"access_token": "not an array"}"#)
            .await
            .unwrap();

        let store = TokenStore::new(&path);
        assert_eq!(store.prepare().await.unwrap(), CacheState::Missing);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_secure_token_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("token.json");
        tokio::fs::write(&path, "[]").await.unwrap();

        let store = TokenStore::new(&path);
        store.secure().await.unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = tokio::fs::metadata(&path).await.unwrap();
            assert_eq!(metadata.permissions().mode() & 0o777, 0o600);
        }
    }
}
