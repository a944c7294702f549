//! Read models returned by the relayer.

use serde::{Deserialize, Serialize};

/// Direction of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

/// An order as stored in the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Order {
    pub id: String,
    pub base_mint: String,
    pub quote_mint: String,
    pub side: OrderSide,
    pub amount: u128,
    #[serde(default)]
    pub allow_external_matches: bool,
}

/// A token balance with accrued fees.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Balance {
    pub mint: String,
    pub amount: u128,
    #[serde(default)]
    pub relayer_fee_balance: u128,
    #[serde(default)]
    pub protocol_fee_balance: u128,
}

impl Balance {
    /// True when no funds or fees are held.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.amount == 0 && self.relayer_fee_balance == 0 && self.protocol_fee_balance == 0
    }
}

/// Wallet state as seen at the back of the relayer's task queue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Wallet {
    pub id: String,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

impl Wallet {
    /// Drop zeroed order and balance slots.
    #[must_use]
    pub fn without_defaults(mut self) -> Self {
        self.orders.retain(|order| order.amount != 0);
        self.balances.retain(|balance| !balance.is_default());
        self
    }
}

/// A partial fill of a historical order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Fill {
    pub amount: u128,
}

/// An order from the wallet's order history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoricalOrder {
    pub id: String,
    pub state: String,
    #[serde(default)]
    pub fills: Vec<Fill>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created: u64,
    pub data: Order,
}

impl HistoricalOrder {
    #[must_use]
    pub fn filled_amount(&self) -> u128 {
        self.fills.iter().map(|fill| fill.amount).sum()
    }

    /// Filled share of the order amount, in percent.
    #[must_use]
    pub fn fill_percentage(&self) -> f64 {
        if self.data.amount == 0 {
            return 0.0;
        }
        (self.filled_amount() as f64 / self.data.amount as f64 * 100.0).min(100.0)
    }
}

/// Descriptor of what a relayer task did.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskInfo {
    pub task_type: String,
    #[serde(default)]
    pub update_type: Option<String>,
}

/// A relayer task from the wallet's task history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Task {
    pub id: String,
    pub state: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: u64,
    pub task_info: TaskInfo,
}

/// Coarse task outcome used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    Failed,
    Pending,
    Unknown,
}

impl Task {
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        match self.state.to_ascii_lowercase().as_str() {
            "completed" => TaskStatus::Completed,
            "failed" => TaskStatus::Failed,
            "queued"
            | "running"
            | "proving"
            | "proving payment"
            | "submitting tx"
            | "submitting payment"
            | "finding opening"
            | "updating validity proofs" => TaskStatus::Pending,
            _ => TaskStatus::Unknown,
        }
    }
}
