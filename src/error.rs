//! Structured error taxonomy.
//!
//! Every fallible operation in the command context subsystem fails with exactly
//! one [`Error`] variant. Each variant maps to a stable [`ErrorCode`] and carries
//! a list of actionable suggestions for the operator.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::BINARY_NAME;

/// Closed set of error kinds surfaced to the CLI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The configuration file could not be written.
    ConfigWrite,
    /// The configuration file exists but holds unusable values.
    ConfigRead,
    /// The wallet secrets file does not exist.
    WalletNotFound,
    /// A file is not syntactically valid JSON.
    InvalidJson,
    /// A file or directory could not be read or written.
    InvalidPermissions,
    /// The chain's token mapping could not be fetched or parsed.
    TokenMapping,
    /// The wallet secrets file lacks a required field.
    InvalidWalletFormat,
    /// The chain ID has no known profile.
    ChainConfig,
    /// The relayer boundary rejected a request.
    Sdk,
}

impl ErrorCode {
    /// Stable upper-case identifier, e.g. `CHAIN_CONFIG_ERROR`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfigWrite => "CONFIG_WRITE_ERROR",
            Self::ConfigRead => "CONFIG_READ_ERROR",
            Self::WalletNotFound => "WALLET_NOT_FOUND",
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidPermissions => "INVALID_PERMISSIONS",
            Self::TokenMapping => "TOKEN_MAPPING_ERROR",
            Self::InvalidWalletFormat => "INVALID_WALLET_FORMAT",
            Self::ChainConfig => "CHAIN_CONFIG_ERROR",
            Self::Sdk => "SDK_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filesystem access mode named in permission errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Command context errors, one variant per [`ErrorCode`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to save configuration to {}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {}: {reason}", .path.display())]
    ConfigRead { path: PathBuf, reason: String },

    #[error("file not found: {}", .path.display())]
    WalletNotFound { path: PathBuf },

    #[error("could not parse JSON in {}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot {access} {}", .path.display())]
    InvalidPermissions { path: PathBuf, access: Access },

    #[error("failed to load token mapping from {url}: {reason}")]
    TokenMapping { url: String, reason: String },

    #[error("wallet secrets file {} is missing required field `{field}`", .path.display())]
    InvalidWalletFormat { path: PathBuf, field: &'static str },

    #[error("unsupported chain ID {chain_id}; supported chains: {supported}")]
    ChainConfig { chain_id: u64, supported: String },

    #[error("SDK error: {message}")]
    Sdk {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a failure reported by the relayer SDK boundary.
    pub fn sdk(message: impl fmt::Display) -> Self {
        Self::Sdk {
            message: message.to_string(),
            source: None,
        }
    }

    /// Wrap a relayer boundary failure, keeping the underlying error as the source.
    pub fn sdk_with<E>(context: impl fmt::Display, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Sdk {
            message: format!("{context}: {source}"),
            source: Some(Box::new(source)),
        }
    }

    /// The kind of this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ConfigWrite { .. } => ErrorCode::ConfigWrite,
            Self::ConfigRead { .. } => ErrorCode::ConfigRead,
            Self::WalletNotFound { .. } => ErrorCode::WalletNotFound,
            Self::InvalidJson { .. } => ErrorCode::InvalidJson,
            Self::InvalidPermissions { .. } => ErrorCode::InvalidPermissions,
            Self::TokenMapping { .. } => ErrorCode::TokenMapping,
            Self::InvalidWalletFormat { .. } => ErrorCode::InvalidWalletFormat,
            Self::ChainConfig { .. } => ErrorCode::ChainConfig,
            Self::Sdk { .. } => ErrorCode::Sdk,
        }
    }

    /// Actionable steps the operator can take to resolve this error.
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigWrite { path, .. } => vec![format!(
                "Ensure you have write permissions to {}",
                path.display()
            )],
            Self::ConfigRead { .. } => vec![
                format!("Run `{BINARY_NAME} config reset` to remove the broken configuration"),
                format!("Run `{BINARY_NAME} setup` to configure the CLI again"),
            ],
            Self::WalletNotFound { path } => vec![
                format!("Ensure the file exists at {}", path.display()),
                "Try using an absolute path".to_string(),
            ],
            Self::InvalidJson { .. } => vec!["Ensure the file contains valid JSON".to_string()],
            Self::InvalidPermissions { path, access } => vec![format!(
                "Check if you have {access} permissions for {}",
                path.display()
            )],
            Self::TokenMapping { url, .. } => vec![
                "Check your internet connection".to_string(),
                format!("Verify that {url} is reachable"),
            ],
            Self::InvalidWalletFormat { field, .. } => vec![
                format!("Ensure your wallet secrets file contains a non-empty `{field}` string"),
                "Regenerate the file following https://docs.renegade.fi/technical-reference/typescript-sdk#generating-wallet-secrets".to_string(),
            ],
            Self::ChainConfig { .. } => {
                vec!["Pass one of the supported chain IDs with --chain-id".to_string()]
            }
            Self::Sdk { .. } => vec![format!(
                "Ensure your wallet secrets file and chain id are properly configured using `{BINARY_NAME} config view`"
            )],
        }
    }
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let suggestions = self.suggestions();
        if suggestions.is_empty() {
            return None;
        }
        let numbered: Vec<String> = suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {s}", i + 1))
            .collect();
        Some(Box::new(numbered.join("\n")))
    }
}
