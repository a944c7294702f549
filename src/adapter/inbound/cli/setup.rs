//! Interactive setup wizard.
//!
//! Asks for a wallet secrets file and a chain, validates the file, saves the
//! configuration, and proves it works by assembling a context.

use std::io;
use std::path::{Path, PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{miette, IntoDiagnostic};

use super::{output, with_spinner, Cancelled, Session};
use crate::domain::ChainId;
use crate::infrastructure::config::{paths, PersistedConfig, ResolvedSettings};
use crate::infrastructure::{wallet, ContextArgs};
use crate::BINARY_NAME;

const SECRETS_DOCS_URL: &str =
    "https://docs.renegade.fi/technical-reference/typescript-sdk#generating-wallet-secrets";

/// Values collected from the prompts.
struct Answers {
    wallet_path: PathBuf,
    chain: ChainId,
}

/// Run the interactive setup wizard.
pub async fn execute(session: &Session) -> miette::Result<()> {
    if output::is_json() {
        return Err(miette!(
            code = "renegade::setup::interactive",
            help = format!(
                "pass --chain-id and --wallet-path to other commands, \
                 or run `{BINARY_NAME} setup` without --json"
            ),
            "`{BINARY_NAME} setup` is interactive and cannot run in JSON mode"
        ));
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::note("Welcome to the Renegade CLI. Let's get you set up.");
    output::note("This CLI is read-only: it never signs or submits transactions.");
    output::note(&format!("Generate wallet secrets as described at {SECRETS_DOCS_URL}"));
    println!();

    // A broken config should not block re-running setup.
    let persisted = match session.store.read() {
        Ok(config) => config,
        Err(e) => {
            output::warning(&format!("Ignoring unreadable configuration: {e}"));
            None
        }
    };
    let defaults = ResolvedSettings::resolve(
        session.chain_id,
        session.wallet_path.clone(),
        persisted.as_ref(),
    );
    let overwrite = session.store.would_overwrite();
    let cwd = std::env::current_dir().into_diagnostic()?;

    // Prompts block on terminal reads; keep them off the runtime so Ctrl-C
    // is still observed.
    let answers = tokio::task::spawn_blocking(move || ask(&defaults, overwrite, &cwd))
        .await
        .into_diagnostic()??;

    let Some(answers) = answers else {
        output::note("Setup cancelled. Current configuration remains unchanged.");
        println!();
        output::suggest_command(
            &format!("{BINARY_NAME} config view"),
            "Show the current configuration",
        );
        output::suggest_command(
            &format!("{BINARY_NAME} config reset"),
            "Delete the current configuration",
        );
        return Ok(());
    };

    println!();
    with_spinner(
        "Validating wallet file...",
        "Wallet file is readable JSON",
        wallet::validate_path(&answers.wallet_path),
    )
    .await?;

    let config = PersistedConfig {
        wallet_path: answers.wallet_path.clone(),
        chain_id: answers.chain,
    };
    session.store.write(&config)?;
    output::success(&format!(
        "Configuration saved to {}",
        session.store.path().display()
    ));

    let args = ContextArgs {
        chain_id: answers.chain.id(),
        wallet_path: answers.wallet_path,
    };
    with_spinner(
        "Connecting wallet...",
        "Wallet secrets and token list loaded",
        session.assembler.create_context(&args),
    )
    .await?;

    output::section("Ready");
    output::field("Chain", answers.chain);
    output::field("Wallet", config.wallet_path.display());
    println!();
    output::suggest_command(&format!("{BINARY_NAME} wallet"), "View orders and balances");
    output::suggest_command(&format!("{BINARY_NAME} order-history"), "View recent orders");
    output::suggest_command(&format!("{BINARY_NAME} task-history"), "View recent relayer tasks");
    Ok(())
}

/// Run the prompts. `None` means the user declined to overwrite.
fn ask(
    defaults: &ResolvedSettings,
    overwrite: bool,
    cwd: &Path,
) -> miette::Result<Option<Answers>> {
    let theme = ColorfulTheme::default();

    if overwrite {
        let proceed = Confirm::with_theme(&theme)
            .with_prompt("A configuration already exists. Overwrite it?")
            .default(false)
            .interact()
            .map_err(prompt_error)?;
        if !proceed {
            return Ok(None);
        }
    }

    output::section("Wallet");
    let wallet_input: String = Input::with_theme(&theme)
        .with_prompt("Path to wallet secrets file")
        .default(defaults.wallet_path.value.display().to_string())
        .interact_text()
        .map_err(prompt_error)?;
    let wallet_path = paths::resolve_input(wallet_input.trim(), cwd);

    output::section("Chain");
    let chains: Vec<String> = ChainId::ALL.iter().map(ToString::to_string).collect();
    let default_chain = ChainId::ALL
        .iter()
        .position(|c| c.id() == defaults.chain_id.value)
        .unwrap_or(0);
    let selected = Select::with_theme(&theme)
        .with_prompt("Select chain")
        .items(&chains)
        .default(default_chain)
        .interact()
        .map_err(prompt_error)?;

    Ok(Some(Answers {
        wallet_path,
        chain: ChainId::ALL[selected],
    }))
}

/// Ctrl-C in a raw-mode prompt surfaces as an interrupted read.
fn prompt_error(err: dialoguer::Error) -> miette::Report {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Cancelled.into(),
        err => miette!("prompt failed: {err}"),
    }
}
