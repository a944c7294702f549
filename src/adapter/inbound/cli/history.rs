//! `renegade order-history` and `renegade task-history`.

use serde::Serialize;

use super::{format, output, with_spinner, Session};
use crate::adapter::outbound::relayer::RelayerClient;
use crate::domain::wallet::{HistoricalOrder, Task, TaskStatus};
use crate::error::Result;

#[derive(Serialize)]
struct OrderHistoryOutput<'a> {
    command: &'static str,
    chain_id: u64,
    orders: &'a [HistoricalOrder],
}

#[derive(Serialize)]
struct TaskHistoryOutput<'a> {
    command: &'static str,
    chain_id: u64,
    tasks: &'a [Task],
}

/// Print the most recent `limit` orders, newest first.
pub async fn orders(session: &Session, limit: usize) -> Result<()> {
    let ctx = session.context().await?;
    let client = RelayerClient::new(ctx.sdk_config())?;

    let orders = with_spinner(
        "Fetching order history from relayer",
        "Fetched order history from relayer",
        client.order_history(limit),
    )
    .await?;

    if output::is_json() {
        output::json_serialized(&OrderHistoryOutput {
            command: "order-history",
            chain_id: ctx.chain_id(),
            orders: &orders,
        });
        return Ok(());
    }

    println!();
    if orders.is_empty() {
        output::note("No orders found in history");
        return Ok(());
    }

    output::lines(&format::order_history_table(&orders, &ctx.sdk_config().tokens));
    println!();
    output::note(&format!("Showing {} most recent orders", orders.len()));
    Ok(())
}

/// Print the most recent `limit` relayer tasks, newest first.
pub async fn tasks(session: &Session, limit: usize) -> Result<()> {
    let ctx = session.context().await?;
    let client = RelayerClient::new(ctx.sdk_config())?;

    let tasks = with_spinner(
        "Fetching task history from relayer",
        "Fetched task history from relayer",
        client.task_history(limit),
    )
    .await?;

    if output::is_json() {
        output::json_serialized(&TaskHistoryOutput {
            command: "task-history",
            chain_id: ctx.chain_id(),
            tasks: &tasks,
        });
        return Ok(());
    }

    println!();
    if tasks.is_empty() {
        output::note("No tasks found in history");
        return Ok(());
    }

    output::lines(&format::task_history_table(&tasks));
    println!();

    let count = |status: TaskStatus| tasks.iter().filter(|t| t.status() == status).count();
    output::note(&format!(
        "{} tasks: {} completed, {} failed, {} pending",
        tasks.len(),
        output::positive(count(TaskStatus::Completed)),
        output::negative(count(TaskStatus::Failed)),
        output::pending(count(TaskStatus::Pending)),
    ));
    Ok(())
}
