//! Logging configuration and initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Map a `-v` count and the `--json` flag to a logging configuration.
    #[must_use]
    pub fn from_verbosity(verbose: u8, json: bool) -> Self {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        Self {
            level: level.into(),
            format: if json { "json" } else { "pretty" }.into(),
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so command output on stdout stays machine-readable.
    /// `RUST_LOG` overrides the configured level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LoggingConfig::from_verbosity(0, false).level, "warn");
        assert_eq!(LoggingConfig::from_verbosity(1, false).level, "info");
        assert_eq!(LoggingConfig::from_verbosity(2, false).level, "debug");
        assert_eq!(LoggingConfig::from_verbosity(7, false).level, "trace");
    }

    #[test]
    fn test_json_flag_selects_json_format() {
        assert_eq!(LoggingConfig::from_verbosity(0, true).format, "json");
        assert_eq!(LoggingConfig::from_verbosity(0, false), LoggingConfig::default());
    }
}
