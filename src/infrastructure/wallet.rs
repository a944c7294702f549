//! Wallet secret loading and validation.
//!
//! [`validate_path`] only checks that a file exists, is readable, and parses
//! as JSON. [`load`] additionally enforces the required secret fields, failing
//! on the first one that is missing or empty.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

use crate::domain::secrets::{WalletSecrets, REQUIRED_FIELDS};
use crate::error::{Access, Error, Result};

/// Check that `path` names a readable file containing valid JSON.
pub async fn validate_path(path: &Path) -> Result<()> {
    read_json(path).await.map(|_| ())
}

/// Read and validate the wallet secrets stored at `path`.
pub async fn load(path: &Path) -> Result<WalletSecrets> {
    let value = read_json(path).await?;
    let secrets = secrets_from_value(path, value)?;
    debug!(
        path = %path.display(),
        wallet_id = %secrets.wallet_id,
        extra_fields = secrets.extra.len(),
        "Loaded wallet secrets"
    );
    Ok(secrets)
}

async fn read_json(path: &Path) -> Result<Value> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(Error::InvalidPermissions {
                path: path.to_path_buf(),
                access: Access::Read,
            });
        }
        Err(_) => {
            return Err(Error::WalletNotFound {
                path: path.to_path_buf(),
            });
        }
    };
    if metadata.is_dir() {
        return Err(Error::WalletNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::WalletNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::InvalidPermissions {
                path: path.to_path_buf(),
                access: Access::Read,
            },
        })?;

    serde_json::from_slice(&bytes).map_err(|source| Error::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

fn secrets_from_value(path: &Path, value: Value) -> Result<WalletSecrets> {
    let Value::Object(mut map) = value else {
        return Err(Error::InvalidWalletFormat {
            path: path.to_path_buf(),
            field: REQUIRED_FIELDS[0],
        });
    };

    let [wallet_id, blinder_seed, share_seed, symmetric_key, sk_match] = REQUIRED_FIELDS;
    let wallet_id = take_field(&mut map, path, wallet_id)?;
    let blinder_seed = take_field(&mut map, path, blinder_seed)?;
    let share_seed = take_field(&mut map, path, share_seed)?;
    let symmetric_key = take_field(&mut map, path, symmetric_key)?;
    let sk_match = take_field(&mut map, path, sk_match)?;

    Ok(WalletSecrets {
        wallet_id,
        blinder_seed,
        share_seed,
        symmetric_key,
        sk_match,
        extra: map,
    })
}

fn take_field(map: &mut Map<String, Value>, path: &Path, field: &'static str) -> Result<String> {
    match map.remove(field) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value),
        _ => Err(Error::InvalidWalletFormat {
            path: path.to_path_buf(),
            field,
        }),
    }
}
