//! Terminal output helpers.
//!
//! Every command writes through these helpers so that `--json` and `--quiet`
//! behave the same everywhere. In JSON mode each helper emits one
//! `{"type": ..., "payload": ...}` line instead of styled text.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;
use serde_json::json;

use crate::error::Error;
use crate::BINARY_NAME;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

fn json_line(kind: &str, payload: serde_json::Value) -> serde_json::Value {
    json!({
        "type": kind,
        "payload": payload,
    })
}

fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!("{}", json_line(kind, payload));
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json || regular_output_suppressed(config) {
        return;
    }

    println!(
        "{} {}",
        BINARY_NAME.if_supports_color(Stream::Stdout, |t| t.bold()),
        version.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {} {}",
        format!("{label:<12}").if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", "✓".if_supports_color(Stream::Stdout, |t| t.green()), message);
}

pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", "⚠".if_supports_color(Stream::Stdout, |t| t.yellow()), message);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Start a progress spinner. Hidden in JSON or quiet mode.
pub fn spinner(message: &str) -> ProgressBar {
    let config = read_config();
    if config.json || config.quiet {
        let pb = ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let style = ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success checkmark.
pub fn spinner_success(pb: &ProgressBar, message: &str) {
    let config = read_config();
    if config.json || config.quiet {
        pb.finish_and_clear();
        return;
    }

    pb.finish_with_message(format!(
        "{} {}",
        "✓".if_supports_color(Stream::Stderr, |t| t.green()),
        message
    ));
}

/// Finish a spinner with a failure mark.
pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    let config = read_config();
    if config.json {
        pb.finish_and_clear();
        return;
    }

    pb.finish_with_message(format!(
        "{} {}",
        "×".if_supports_color(Stream::Stderr, |t| t.red()),
        message
    ));
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.if_supports_color(Stream::Stdout, |t| t.green()))
}

/// Format a negative value in red.
pub fn negative(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.if_supports_color(Stream::Stdout, |t| t.red()))
}

/// Format a pending value in yellow.
pub fn pending(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.if_supports_color(Stream::Stdout, |t| t.yellow()))
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.if_supports_color(Stream::Stdout, |t| t.cyan()))
}

pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", message.if_supports_color(Stream::Stdout, |t| t.dimmed()));
}

/// Print a hint with a "hint:" prefix.
pub fn hint(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("hint", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {}: {}",
        "hint".if_supports_color(Stream::Stdout, |t| t.style(Style::new().cyan().dimmed())),
        message.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Print a related command and what it does.
pub fn suggest_command(command: &str, description: &str) {
    let config = read_config();

    if config.json {
        emit_json_line(
            "suggestion",
            json!({ "command": command, "description": description }),
        );
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    let command = format!("$ {command}");
    println!("  {}", command.if_supports_color(Stream::Stdout, |t| t.cyan()));
    println!("      {}", description.if_supports_color(Stream::Stdout, |t| t.dimmed()));
}

/// Print multiple lines of content, each indented.
///
/// Skipped in JSON mode; callers emit structured data with [`json_output`].
pub fn lines(content: &str) {
    let config = read_config();
    if config.json || regular_output_suppressed(config) {
        return;
    }

    for line in content.lines() {
        println!("  {}", line);
    }
}

/// Emit a JSON value directly.
pub fn json_output(value: serde_json::Value) {
    println!("{}", value);
}

/// Emit any serializable value as one JSON line.
///
/// Serializes straight to text so 128-bit amounts survive intact.
pub fn json_serialized<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => report_message(&format!("failed to serialize output: {e}")),
    }
}

/// Structured JSON form of an error.
#[must_use]
pub fn error_json(err: &Error) -> serde_json::Value {
    json_line(
        "error",
        json!({
            "code": err.code().as_str(),
            "message": err.to_string(),
            "suggestions": err.suggestions(),
        }),
    )
}

/// Human-readable form of an error with numbered suggestions.
#[must_use]
pub fn error_text(err: &Error) -> String {
    let mut text = format!("{} {err}\n", error_label());
    let suggestions = err.suggestions();
    if !suggestions.is_empty() {
        text.push_str("\nTo fix this:\n");
        for (i, suggestion) in suggestions.iter().enumerate() {
            text.push_str(&format!("  {}. {suggestion}\n", i + 1));
        }
    }
    text.push_str(&format!(
        "\nFor more help:\n  $ {BINARY_NAME} {} --help\n",
        help_topic(err)
    ));
    text
}

fn error_label() -> String {
    "Error:"
        .if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold()))
        .to_string()
}

fn help_topic(err: &Error) -> &'static str {
    match err {
        Error::ConfigRead { .. } | Error::ConfigWrite { .. } => "config",
        _ => "setup",
    }
}

/// Report a command failure on stderr.
pub fn report_error(err: &Error) {
    if is_json() {
        eprintln!("{}", error_json(err));
        return;
    }
    eprint!("{}", error_text(err));
}

/// Report a failure from outside the core error set on stderr.
pub fn report_message(message: &str) {
    if is_json() {
        eprintln!("{}", json_line("error", json!({ "message": message })));
        return;
    }
    eprintln!("{} {}", error_label(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_json_shape() {
        let err = Error::WalletNotFound {
            path: PathBuf::from("/tmp/w.json"),
        };
        let value = error_json(&err);
        assert_eq!(value["type"], "error");
        assert_eq!(value["payload"]["code"], "WALLET_NOT_FOUND");
        assert_eq!(value["payload"]["message"], "file not found: /tmp/w.json");
        assert_eq!(value["payload"]["suggestions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_error_text_numbers_suggestions() {
        let err = Error::sdk("relayer returned 500");
        let text = error_text(&err);
        assert!(text.contains("relayer returned 500"));
        assert!(text.contains("To fix this:"));
        assert!(text.contains("1. Ensure your wallet secrets file"));
        assert!(text.contains("renegade setup --help"));
    }

    #[test]
    fn test_config_errors_point_at_config_help() {
        let err = Error::ConfigRead {
            path: PathBuf::from("/tmp/c.json"),
            reason: "bad".to_string(),
        };
        assert!(error_text(&err).contains("renegade config --help"));
    }
}
