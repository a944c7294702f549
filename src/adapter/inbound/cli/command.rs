//! Command-line interface definitions.
//!
//! Defines the CLI structure for the `renegade` binary using `clap`. Global
//! flags apply to every subcommand and may appear before or after it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Read-only command-line client for a Renegade dark pool wallet
#[derive(Parser, Debug)]
#[command(name = "renegade")]
#[command(version)]
pub struct Cli {
    /// Chain ID to use (42161 Arbitrum One, 421614 Arbitrum Sepolia)
    #[arg(long, global = true, value_name = "ID")]
    pub chain_id: Option<u64>,

    /// Path to the wallet secrets JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub wallet_path: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the renegade CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the wallet path and chain interactively
    Setup,

    /// View or reset the saved configuration
    Config(ConfigArgs),

    /// Display wallet state information
    Wallet(WalletArgs),

    /// Display order history
    OrderHistory(HistoryArgs),

    /// Display task history
    TaskHistory(HistoryArgs),
}

/// Arguments for `renegade config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigCommand>,
}

/// Subcommands for `renegade config`. Defaults to `view`.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Show the saved configuration
    View,
    /// Delete the saved configuration
    Reset,
}

/// Wallet sections that can be displayed on their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WalletField {
    Orders,
    Balances,
    Fees,
}

/// Arguments for `renegade wallet`.
#[derive(Args, Debug)]
pub struct WalletArgs {
    /// Specific field to display
    #[arg(long)]
    pub field: Option<WalletField>,

    /// Keep empty order and balance slots
    #[arg(long)]
    pub no_filter: bool,
}

impl WalletArgs {
    /// Whether empty slots should be dropped. Fee views always show every
    /// balance since a zero balance may still carry fees.
    #[must_use]
    pub fn filter_defaults(&self) -> bool {
        self.field != Some(WalletField::Fees) && !self.no_filter
    }
}

/// Arguments shared by the history commands.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of entries to display
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}
