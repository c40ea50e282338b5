//! CRUD over per-account transaction partitions. Every mutation persists the
//! full replacement list: the stored list always reflects exactly the
//! in-memory list at write time, at O(n) cost per write.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Transaction, TransactionType};
use crate::errors::FinanceError;
use crate::store::{self, KeyValueStore};

use super::RepoResult;

const TX_KEY_PREFIX: &str = "transactions_v2:";

fn partition_key(account_id: Uuid) -> String {
    format!("{TX_KEY_PREFIX}{account_id}")
}

/// Drops the entire persisted partition for `account_id`. Shared between
/// reset and the account-deletion cascade.
pub(crate) async fn remove_partition(store: &dyn KeyValueStore, account_id: Uuid) {
    store::remove_key(store, &partition_key(account_id)).await;
}

pub struct TransactionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl TransactionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the partition for `account_id`, most-recent-insertion first.
    /// An account with no partition yet reads as an empty list.
    pub async fn list(&self, account_id: Uuid) -> Vec<Transaction> {
        store::read_json(self.store.as_ref(), &partition_key(account_id), Vec::new()).await
    }

    /// Records a new transaction at the head of the partition. The signed
    /// amount is derived strictly from `kind`; non-positive or non-finite
    /// amounts are rejected.
    pub async fn add(
        &self,
        account_id: Uuid,
        kind: TransactionType,
        abs_amount: f64,
        description: &str,
        date: DateTime<Utc>,
    ) -> RepoResult<Transaction> {
        if !abs_amount.is_finite() || abs_amount <= 0.0 {
            return Err(FinanceError::InvalidAmount(abs_amount));
        }
        let txn = Transaction::new(kind, abs_amount, description.trim(), date);
        let mut partition = self.list(account_id).await;
        partition.insert(0, txn.clone());
        store::write_json(self.store.as_ref(), &partition_key(account_id), &partition).await;
        Ok(txn)
    }

    /// Removes one transaction by id. No-op when the id is not present.
    pub async fn delete(&self, account_id: Uuid, id: Uuid) {
        let mut partition = self.list(account_id).await;
        let before = partition.len();
        partition.retain(|txn| txn.id != id);
        if partition.len() != before {
            store::write_json(self.store.as_ref(), &partition_key(account_id), &partition).await;
        }
    }

    /// Clears the partition by removing its key outright.
    pub async fn reset(&self, account_id: Uuid) {
        remove_partition(self.store.as_ref(), account_id).await;
    }

    /// Cascade hook invoked when an account is deleted.
    pub async fn delete_for_account(&self, account_id: Uuid) {
        remove_partition(self.store.as_ref(), account_id).await;
    }
}
