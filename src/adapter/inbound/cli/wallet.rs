//! `renegade wallet`.

use serde::Serialize;

use super::command::{WalletArgs, WalletField};
use super::{format, output, with_spinner, Session};
use crate::adapter::outbound::relayer::RelayerClient;
use crate::domain::wallet::Wallet;
use crate::error::Result;
use crate::BINARY_NAME;

#[derive(Serialize)]
struct WalletOutput<'a> {
    command: &'static str,
    chain_id: u64,
    field: Option<&'static str>,
    wallet: &'a Wallet,
}

fn field_name(field: WalletField) -> &'static str {
    match field {
        WalletField::Orders => "orders",
        WalletField::Balances => "balances",
        WalletField::Fees => "fees",
    }
}

/// Fetch the back-of-queue wallet and print the requested sections.
pub async fn execute(session: &Session, args: &WalletArgs) -> Result<()> {
    let ctx = session.context().await?;
    let client = RelayerClient::new(ctx.sdk_config())?;

    let wallet = with_spinner(
        "Fetching wallet from relayer",
        "Fetched wallet from relayer",
        client.back_of_queue_wallet(args.filter_defaults()),
    )
    .await?;

    if output::is_json() {
        output::json_serialized(&WalletOutput {
            command: "wallet",
            chain_id: ctx.chain_id(),
            field: args.field.map(field_name),
            wallet: &wallet,
        });
        return Ok(());
    }

    let tokens = &ctx.sdk_config().tokens;
    let show_orders = matches!(args.field, None | Some(WalletField::Orders));
    let show_balances = matches!(args.field, None | Some(WalletField::Balances));

    if show_orders {
        output::section("Orders");
        if wallet.orders.is_empty() {
            output::note("No orders found");
        } else {
            output::lines(&format::orders_table(&wallet.orders, tokens));
        }
    }
    if show_balances {
        output::section("Balances");
        if wallet.balances.is_empty() {
            output::note("No balances found");
        } else {
            output::lines(&format::balances_table(&wallet.balances, tokens));
        }
    }
    if args.field == Some(WalletField::Fees) {
        output::section("Fees");
        if wallet.balances.is_empty() {
            output::note("No fees found");
        } else {
            output::lines(&format::fees_table(&wallet.balances, tokens));
        }
    }

    println!();
    print_related(args.field);
    Ok(())
}

fn print_related(field: Option<WalletField>) {
    let suggestions: &[(&str, &str)] = match field {
        Some(WalletField::Orders) => &[(
            "order-history",
            "View detailed order history with fill percentages",
        )],
        Some(WalletField::Balances) => &[("wallet --field fees", "View your fee balances")],
        Some(WalletField::Fees) => &[
            ("wallet --field orders", "View your open orders"),
            ("wallet --field balances", "View your token balances"),
        ],
        None => &[
            ("wallet --field orders", "View your open orders"),
            ("wallet --field balances", "View your token balances"),
            ("wallet --field fees", "View your fee balances"),
        ],
    };

    output::note("Try these related commands:");
    for (command, description) in suggestions {
        output::suggest_command(&format!("{BINARY_NAME} {command}"), description);
    }
}
