//! Persisted configuration store.
//!
//! Owns a single JSON file holding the last-used wallet path and chain ID.
//! A missing file means "not configured yet" and is not an error.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use tracing::{debug, info};

use super::paths;
use crate::domain::ChainId;
use crate::error::{Access, Error, Result};

/// Configuration remembered between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedConfig {
    pub wallet_path: PathBuf,
    pub chain_id: ChainId,
}

/// Reads, writes, and deletes the persisted configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the well-known per-user location.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(paths::config_file())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a write would replace an existing configuration file.
    #[must_use]
    pub fn would_overwrite(&self) -> bool {
        self.path.exists()
    }

    /// Load the configuration, or `None` when no file exists.
    pub fn read(&self) -> Result<Option<PersistedConfig>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted configuration");
                return Ok(None);
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(Error::InvalidPermissions {
                    path: self.path.clone(),
                    access: Access::Read,
                });
            }
            Err(e) => {
                return Err(Error::ConfigRead {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
        };

        let config: PersistedConfig =
            serde_json::from_slice(&bytes).map_err(|source| match source.classify() {
                // Well-formed JSON with the wrong shape, e.g. an unsupported chain.
                Category::Data => Error::ConfigRead {
                    path: self.path.clone(),
                    reason: source.to_string(),
                },
                _ => Error::InvalidJson {
                    path: self.path.clone(),
                    source,
                },
            })?;

        debug!(
            path = %self.path.display(),
            chain_id = config.chain_id.id(),
            "Loaded persisted configuration"
        );
        Ok(Some(config))
    }

    /// Persist `config`, replacing any existing file.
    ///
    /// Writes to a sibling temp file and renames it into place so readers
    /// never observe a half-written file.
    pub fn write(&self, config: &PersistedConfig) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        fs::create_dir_all(dir).map_err(|_| Error::InvalidPermissions {
            path: dir.to_path_buf(),
            access: Access::Write,
        })?;

        let mut json = serde_json::to_string_pretty(config).map_err(|e| Error::ConfigWrite {
            path: self.path.clone(),
            source: io::Error::other(e),
        })?;
        json.push('\n');

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => Error::InvalidPermissions {
                path: dir.to_path_buf(),
                access: Access::Write,
            },
            _ => self.write_error(e),
        })?;

        let cleanup_and_err = |e: io::Error| {
            let _ = fs::remove_file(&temp_path);
            self.write_error(e)
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        info!(
            path = %self.path.display(),
            chain_id = config.chain_id.id(),
            "Saved configuration"
        );
        Ok(())
    }

    /// Remove the configuration file. Succeeds if it does not exist.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Deleted configuration");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(Error::InvalidPermissions {
                path: self.path.clone(),
                access: Access::Write,
            }),
            Err(e) => Err(self.write_error(e)),
        }
    }

    /// `config.json.<pid>.tmp`, unique per process.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "config.json".into());
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::ConfigWrite {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    fn sample() -> PersistedConfig {
        PersistedConfig {
            wallet_path: PathBuf::from("/home/user/wallet.json"),
            chain_id: ChainId::ArbitrumSepolia,
        }
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let temp_dir = create_temp_dir();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));

        for chain_id in ChainId::ALL {
            let config = PersistedConfig {
                wallet_path: PathBuf::from("relative/wallet.json"),
                chain_id,
            };
            store.write(&config).unwrap();
            assert_eq!(store.read().unwrap(), Some(config));
        }
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let temp_dir = create_temp_dir();
        let store = ConfigStore::new(temp_dir.path().join("absent.json"));
        assert_eq!(store.read().unwrap(), None);
        assert!(!store.would_overwrite());
    }

    #[test]
    fn test_delete_missing_file_is_noop() {
        let temp_dir = create_temp_dir();
        let store = ConfigStore::new(temp_dir.path().join("absent.json"));
        store.delete().unwrap();
        store.delete().unwrap();
    }

    #[test]
    fn test_delete_removes_file() {
        let temp_dir = create_temp_dir();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));
        store.write(&sample()).unwrap();
        assert!(store.would_overwrite());

        store.delete().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("a").join("b").join("config.json");
        let store = ConfigStore::new(&path);

        store.write(&sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_uses_camel_case_keys() {
        let temp_dir = create_temp_dir();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));
        store.write(&sample()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["walletPath"], "/home/user/wallet.json");
        assert_eq!(value["chainId"], 421614);
        assert!(content.contains("\n  \"walletPath\""), "expected pretty JSON");
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = create_temp_dir();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));
        store.write(&sample()).unwrap();
        store.write(&sample()).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("config.json")]);
    }

    #[test]
    fn test_failed_write_keeps_previous_config() {
        let temp_dir = create_temp_dir();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));
        let previous = PersistedConfig {
            wallet_path: PathBuf::from("/old.json"),
            chain_id: ChainId::ArbitrumOne,
        };
        store.write(&previous).unwrap();

        // A directory squatting on the temp path makes the write fail.
        fs::create_dir(store.temp_path()).unwrap();
        let err = store.write(&sample()).unwrap_err();

        assert_eq!(err.code(), ErrorCode::ConfigWrite);
        assert_eq!(store.read().unwrap(), Some(previous));
    }

    #[test]
    fn test_overwrite_replaces_previous_config() {
        let temp_dir = create_temp_dir();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));
        store.write(&sample()).unwrap();

        let updated = PersistedConfig {
            wallet_path: PathBuf::from("/other/wallet.json"),
            chain_id: ChainId::ArbitrumOne,
        };
        store.write(&updated).unwrap();
        assert_eq!(store.read().unwrap(), Some(updated));
    }

    #[test]
    fn test_read_malformed_file_is_invalid_json() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigStore::new(&path).read().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidJson);
    }

    #[test]
    fn test_read_unsupported_chain_is_config_read_error() {
        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"walletPath":"/w.json","chainId":1}"#).unwrap();

        let err = ConfigStore::new(&path).read().unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConfigRead);
        assert!(err.to_string().contains("421614"));
    }

    #[test]
    fn test_write_into_file_as_directory_fails() {
        let temp_dir = create_temp_dir();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let store = ConfigStore::new(blocker.join("config.json"));
        let err = store.write(&sample()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPermissions);
    }

    #[cfg(unix)]
    #[test]
    fn test_read_unreadable_file_is_permission_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = create_temp_dir();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"walletPath":"/w.json","chainId":42161}"#).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass file modes.
        if fs::read(&path).is_ok() {
            return;
        }

        let err = ConfigStore::new(&path).read().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPermissions);
    }
}
