//! `renegade config view|reset`.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::ConfigStore;
use crate::BINARY_NAME;

/// Show the saved configuration, if any.
pub fn view(store: &ConfigStore) -> Result<()> {
    let config = store.read()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.view",
            "path": store.path().display().to_string(),
            "config": config,
        }));
        return Ok(());
    }

    let Some(config) = config else {
        output::warning("No configuration found");
        output::hint(&format!(
            "run {} to configure the CLI",
            output::highlight(format!("{BINARY_NAME} setup"))
        ));
        return Ok(());
    };

    output::section("Current configuration");
    output::field("Chain", config.chain_id);
    output::field("Wallet", config.wallet_path.display());
    output::field("File", store.path().display());
    println!();
    output::hint(&format!(
        "run {} to modify configuration",
        output::highlight(format!("{BINARY_NAME} setup"))
    ));
    Ok(())
}

/// Delete the saved configuration. Succeeds when none exists.
pub fn reset(store: &ConfigStore) -> Result<()> {
    store.delete()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.reset",
            "path": store.path().display().to_string(),
            "status": "reset",
        }));
        return Ok(());
    }

    output::success("Configuration reset successfully");
    output::hint(&format!(
        "run {} to configure the CLI",
        output::highlight(format!("{BINARY_NAME} setup"))
    ));
    Ok(())
}
