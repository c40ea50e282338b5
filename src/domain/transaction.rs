use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a monetary event.
///
/// Persisted alongside the signed amount for display convenience; the sign of
/// `amount` is the canonical source of truth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A single signed monetary event belonging to exactly one account.
///
/// Transactions are never edited in place: they are created, optionally
/// deleted, and otherwise immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Positive for income, negative for expense.
    pub amount: f64,
    pub description: String,
    /// User-selected, not necessarily the moment of entry.
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Builds a transaction whose sign is derived strictly from `kind`, so the
    /// sign/type invariant cannot be violated through this constructor.
    pub fn new(
        kind: TransactionType,
        abs_amount: f64,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        let amount = match kind {
            TransactionType::Income => abs_amount.abs(),
            TransactionType::Expense => -abs_amount.abs(),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            description: description.into(),
            date,
        }
    }

    /// True when the persisted sign still matches the persisted type.
    pub fn sign_matches_kind(&self) -> bool {
        match self.kind {
            TransactionType::Income => self.amount >= 0.0,
            TransactionType::Expense => self.amount <= 0.0,
        }
    }
}
