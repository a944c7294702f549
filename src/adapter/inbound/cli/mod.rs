//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod format;
pub mod history;
pub mod output;
pub mod setup;
pub mod wallet;

use std::future::Future;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

pub use command::{Cli, ColorChoice, Commands};

use self::command::ConfigCommand;
use crate::error::Result;
use crate::infrastructure::config::{ConfigStore, ResolvedSettings};
use crate::infrastructure::{ContextArgs, ContextAssembler, ExecutionContext};

/// The user interrupted an interactive command.
#[derive(Debug, Error, Diagnostic)]
#[error("Operation cancelled")]
pub struct Cancelled;

/// Per-invocation overrides and collaborators shared by command handlers.
pub struct Session {
    pub chain_id: Option<u64>,
    pub wallet_path: Option<PathBuf>,
    pub store: ConfigStore,
    pub assembler: ContextAssembler,
}

impl Session {
    /// Apply argument > config file > default precedence.
    pub fn settings(&self) -> Result<ResolvedSettings> {
        let persisted = self.store.read()?;
        let settings =
            ResolvedSettings::resolve(self.chain_id, self.wallet_path.clone(), persisted.as_ref());
        debug!(
            chain_id = settings.chain_id.value,
            chain_source = %settings.chain_id.source,
            wallet_path = %settings.wallet_path.value.display(),
            wallet_source = %settings.wallet_path.source,
            "Resolved settings"
        );
        Ok(settings)
    }

    /// Resolve settings and assemble the execution context.
    pub async fn context(&self) -> Result<ExecutionContext> {
        let settings = self.settings()?;
        self.assembler
            .create_context(&ContextArgs::from(&settings))
            .await
    }
}

/// Run `future` behind a spinner, marking it done or failed.
pub(crate) async fn with_spinner<T, F>(message: &str, done: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let spinner = output::spinner(message);
    match future.await {
        Ok(value) => {
            output::spinner_success(&spinner, done);
            Ok(value)
        }
        Err(e) => {
            output::spinner_fail(&spinner, message.trim_end_matches('.'));
            Err(e)
        }
    }
}

/// Dispatch a parsed command.
pub async fn run(command: Commands, session: &Session) -> miette::Result<()> {
    match command {
        Commands::Setup => setup::execute(session).await?,
        Commands::Config(args) => match args.action.unwrap_or(ConfigCommand::View) {
            ConfigCommand::View => config::view(&session.store)?,
            ConfigCommand::Reset => config::reset(&session.store)?,
        },
        Commands::Wallet(args) => wallet::execute(session, &args).await?,
        Commands::OrderHistory(args) => history::orders(session, args.limit).await?,
        Commands::TaskHistory(args) => history::tasks(session, args.limit).await?,
    }
    Ok(())
}
