//! Table rendering for relayer read models.

use chrono::DateTime;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::domain::token::format_units;
use crate::domain::wallet::{Balance, HistoricalOrder, Order, OrderSide, Task, TaskStatus};
use crate::domain::TokenMap;

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "External")]
    external: &'static str,
}

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct FeeRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Relayer Fee")]
    relayer: String,
    #[tabled(rename = "Protocol Fee")]
    protocol: String,
}

#[derive(Tabled)]
struct OrderHistoryRow {
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Filled")]
    filled: String,
    #[tabled(rename = "State")]
    state: String,
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Task")]
    task: String,
}

fn side(side: OrderSide) -> &'static str {
    match side {
        OrderSide::Buy => "BUY",
        OrderSide::Sell => "SELL",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Millisecond timestamp as `Jan 02 2006 15:04 UTC`.
#[must_use]
pub fn timestamp(ms: u64) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map_or_else(|| ms.to_string(), |t| t.format("%b %d %Y %H:%M UTC").to_string())
}

/// Single-character status marker.
#[must_use]
pub fn status_glyph(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "✓",
        TaskStatus::Failed => "✗",
        TaskStatus::Pending => "⋯",
        TaskStatus::Unknown => "?",
    }
}

fn render<T: Tabled>(rows: Vec<T>, numeric: &[usize]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    for &column in numeric {
        table.with(Modify::new(Columns::single(column)).with(Alignment::right()));
    }
    table.to_string()
}

#[must_use]
pub fn orders_table(orders: &[Order], tokens: &TokenMap) -> String {
    let rows = orders
        .iter()
        .map(|order| OrderRow {
            id: order.id.clone(),
            side: side(order.side),
            asset: tokens.ticker(&order.base_mint),
            amount: tokens.format_amount(&order.base_mint, order.amount),
            external: yes_no(order.allow_external_matches),
        })
        .collect();
    render(rows, &[3])
}

#[must_use]
pub fn balances_table(balances: &[Balance], tokens: &TokenMap) -> String {
    let rows = balances
        .iter()
        .map(|balance| BalanceRow {
            asset: tokens.ticker(&balance.mint),
            amount: tokens.format_amount(&balance.mint, balance.amount),
        })
        .collect();
    render(rows, &[1])
}

#[must_use]
pub fn fees_table(balances: &[Balance], tokens: &TokenMap) -> String {
    let rows = balances
        .iter()
        .map(|balance| FeeRow {
            asset: tokens.ticker(&balance.mint),
            relayer: tokens.format_amount(&balance.mint, balance.relayer_fee_balance),
            protocol: tokens.format_amount(&balance.mint, balance.protocol_fee_balance),
        })
        .collect();
    render(rows, &[1, 2])
}

#[must_use]
pub fn order_history_table(orders: &[HistoricalOrder], tokens: &TokenMap) -> String {
    let rows = orders
        .iter()
        .map(|order| {
            let decimals = tokens
                .find_by_address(&order.data.base_mint)
                .map_or(0, |t| t.decimals);
            OrderHistoryRow {
                created: timestamp(order.created),
                id: order.id.clone(),
                side: side(order.data.side),
                pair: format!(
                    "{}/{}",
                    tokens.ticker(&order.data.base_mint),
                    tokens.ticker(&order.data.quote_mint)
                ),
                amount: format_units(order.data.amount, decimals),
                filled: format!("{:.1}%", order.fill_percentage()),
                state: order.state.clone(),
            }
        })
        .collect();
    render(rows, &[4, 5])
}

#[must_use]
pub fn task_history_table(tasks: &[Task]) -> String {
    let rows = tasks
        .iter()
        .map(|task| TaskRow {
            created: timestamp(task.created_at),
            id: task.id.clone(),
            status: status_glyph(task.status()),
            task: match &task.task_info.update_type {
                Some(update) => format!("{update} ({})", task.task_info.task_type),
                None => task.task_info.task_type.clone(),
            },
        })
        .collect();
    render(rows, &[])
}
