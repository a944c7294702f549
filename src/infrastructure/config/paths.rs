//! Path utilities for the renegade CLI.
//!
//! Persisted state lives under `~/.renegade/` (or `$RENEGADE_HOME`):
//! - `config.json` - last-used wallet path and chain ID

use std::path::{Path, PathBuf};

/// Overrides the CLI home directory.
pub const HOME_ENV: &str = "RENEGADE_HOME";

/// Returns the CLI home directory (`$RENEGADE_HOME` or `~/.renegade/`).
pub fn home_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    user_home().join(".renegade")
}

/// Returns the persisted config file path.
pub fn config_file() -> PathBuf {
    home_dir().join("config.json")
}

/// Returns the wallet secrets path used when nothing else is configured.
pub fn default_wallet_path() -> PathBuf {
    user_home().join("wallet.json")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => user_home(),
        Some(rest) if rest.starts_with('/') => user_home().join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// Expand `~` in user input and anchor relative paths at `cwd`.
pub fn resolve_input(input: &str, cwd: &Path) -> PathBuf {
    let path = expand_home(input);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn user_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_json_under_home() {
        let config = config_file();
        assert!(config.starts_with(home_dir()));
        assert_eq!(config.file_name().unwrap(), "config.json");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("~"), user_home());
        assert_eq!(expand_home("~/w.json"), user_home().join("w.json"));
        assert_eq!(expand_home("/abs/w.json"), PathBuf::from("/abs/w.json"));
        assert_eq!(expand_home("~other/w.json"), PathBuf::from("~other/w.json"));
    }

    #[test]
    fn test_resolve_input_anchors_relative_paths() {
        let cwd = Path::new("/work/dir");
        assert_eq!(
            resolve_input("wallet.json", cwd),
            PathBuf::from("/work/dir/wallet.json")
        );
        assert_eq!(
            resolve_input("./keys/w.json", cwd),
            PathBuf::from("/work/dir/./keys/w.json")
        );
        assert_eq!(resolve_input("/abs/w.json", cwd), PathBuf::from("/abs/w.json"));
        assert!(resolve_input("~/w.json", cwd).starts_with(user_home()));
    }

    #[test]
    fn test_default_wallet_path() {
        assert_eq!(default_wallet_path().file_name().unwrap(), "wallet.json");
    }
}
