//! In-memory session state composing the repositories and the aggregation
//! engine. The application shell owns one `Session` and hands it to
//! presentation code; there is no global singleton.
//!
//! Mutations are two-phase: the in-memory state updates first and is what the
//! caller observes, then the change is persisted best-effort. A failed write
//! is logged by the store layer and never rolls the in-memory state back, so
//! durability is at-most-once per command.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Account, Transaction, TransactionType};
use crate::repo::{AccountRepository, RepoResult, TransactionRepository};
use crate::store::KeyValueStore;
use crate::summary::{self, MonthlyTotals};

pub struct Session {
    account_repo: AccountRepository,
    transaction_repo: TransactionRepository,
    accounts: Vec<Account>,
    selected_id: Uuid,
    transactions: Vec<Transaction>,
}

impl Session {
    /// Brings the store to a valid baseline and loads the selected account's
    /// partition.
    pub async fn initialize(store: Arc<dyn KeyValueStore>) -> Self {
        let account_repo = AccountRepository::new(store.clone());
        let transaction_repo = TransactionRepository::new(store);
        let (accounts, selected_id) = account_repo.ensure_initialized().await;
        let transactions = transaction_repo.list(selected_id).await;
        tracing::debug!(
            account = %selected_id,
            count = transactions.len(),
            "session initialized"
        );
        Self {
            account_repo,
            transaction_repo,
            accounts,
            selected_id,
            transactions,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn selected_id(&self) -> Uuid {
        self.selected_id
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.id == self.selected_id)
    }

    /// The selected account's transactions, most-recent-insertion first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Running balance of the selected account.
    pub fn balance(&self) -> f64 {
        summary::balance(&self.transactions)
    }

    /// Income/expense totals for the calendar month containing `reference`.
    pub fn monthly_totals(&self, reference: DateTime<Utc>) -> MonthlyTotals {
        summary::monthly_totals(&self.transactions, reference)
    }

    /// Records a transaction against the selected account.
    pub async fn add_transaction(
        &mut self,
        kind: TransactionType,
        abs_amount: f64,
        description: &str,
        date: DateTime<Utc>,
    ) -> RepoResult<Transaction> {
        let txn = self
            .transaction_repo
            .add(self.selected_id, kind, abs_amount, description, date)
            .await?;
        self.transactions.insert(0, txn.clone());
        Ok(txn)
    }

    /// Deletes one transaction from the selected account. Unknown ids no-op.
    pub async fn delete_transaction(&mut self, id: Uuid) {
        self.transactions.retain(|txn| txn.id != id);
        self.transaction_repo.delete(self.selected_id, id).await;
    }

    /// Drops the selected account's entire history.
    pub async fn clear_transactions(&mut self) {
        self.transactions.clear();
        self.transaction_repo.reset(self.selected_id).await;
    }

    /// Creates an account, selects it, and starts it with an empty partition.
    pub async fn create_account(&mut self, name: &str) -> Account {
        let account = self.account_repo.create(name).await;
        self.accounts.insert(0, account.clone());
        self.selected_id = account.id;
        // a fresh account has no partition yet
        self.transactions = Vec::new();
        account
    }

    pub async fn rename_account(&mut self, id: Uuid, name: &str) -> RepoResult<()> {
        self.accounts = self.account_repo.rename(id, name).await?;
        Ok(())
    }

    /// Deletes an account and cascades to its partition; reloads transactions
    /// when the selection had to move.
    pub async fn delete_account(&mut self, id: Uuid) -> RepoResult<()> {
        let (accounts, selected) = self.account_repo.delete(id).await?;
        self.accounts = accounts;
        if selected != self.selected_id {
            self.selected_id = selected;
            self.transactions = self.transaction_repo.list(selected).await;
        }
        Ok(())
    }

    /// Switches the active account and loads its partition.
    pub async fn switch_account(&mut self, id: Uuid) -> RepoResult<()> {
        self.account_repo.switch(id).await?;
        self.selected_id = id;
        self.transactions = self.transaction_repo.list(id).await;
        Ok(())
    }

    /// Re-reads accounts and selection from the store, reloading the
    /// partition when the selection moved underneath the session.
    pub async fn refresh_accounts(&mut self) {
        self.accounts = self.account_repo.list().await;
        if let Some(selected) = self.account_repo.selected_id().await {
            if selected != self.selected_id {
                self.selected_id = selected;
                self.transactions = self.transaction_repo.list(selected).await;
            }
        }
    }
}
