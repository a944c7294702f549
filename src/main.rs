use std::process::ExitCode;

use clap::Parser;
use tokio::signal;
use tracing::{debug, info};

use renegade_cli::adapter::inbound::cli::output::{self, OutputConfig};
use renegade_cli::adapter::inbound::cli::{self, Cancelled, Cli, ColorChoice, Session};
use renegade_cli::error::Error;
use renegade_cli::infrastructure::config::{ConfigStore, LoggingConfig};
use renegade_cli::infrastructure::ContextAssembler;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    match args.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(args.json, args.quiet, args.verbose));
    LoggingConfig::from_verbosity(args.verbose, args.json).init();

    let session = Session {
        chain_id: args.chain_id,
        wallet_path: args.wallet_path,
        store: ConfigStore::default_location(),
        assembler: ContextAssembler::default(),
    };
    debug!(config = %session.store.path().display(), "renegade starting");

    tokio::select! {
        biased;

        _ = signal::ctrl_c() => {
            info!("Interrupt received");
            eprintln!("\nOperation cancelled");
            // Blocking prompt threads keep the runtime from shutting down.
            std::process::exit(0);
        }
        result = cli::run(args.command, &session) => match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(report) if report.downcast_ref::<Cancelled>().is_some() => {
                info!("Prompt interrupted");
                eprintln!("\nOperation cancelled");
                ExitCode::SUCCESS
            }
            Err(report) => {
                match report.downcast_ref::<Error>() {
                    Some(err) => output::report_error(err),
                    None if output::is_json() => output::report_message(&report.to_string()),
                    None => eprintln!("{report:?}"),
                }
                ExitCode::FAILURE
            }
        },
    }
}
