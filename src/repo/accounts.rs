//! CRUD over the account list plus the persisted selection pointer.
//!
//! Two invariants hold after initialization: the account list is never empty
//! (deleting the last account synthesizes a fresh default), and the selection
//! pointer always references an existing account.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Account;
use crate::errors::FinanceError;
use crate::store::{self, KeyValueStore};

use super::{transactions, RepoResult};

const ACCOUNTS_KEY: &str = "accounts_v1";
const SELECTED_ACCOUNT_KEY: &str = "selected_account_v1";
const DEFAULT_ACCOUNT_NAME: &str = "Cash";
const FALLBACK_ACCOUNT_NAME: &str = "New Account";

pub struct AccountRepository {
    store: Arc<dyn KeyValueStore>,
}

impl AccountRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns all accounts, most-recently-created first.
    pub async fn list(&self) -> Vec<Account> {
        store::read_json(self.store.as_ref(), ACCOUNTS_KEY, Vec::new()).await
    }

    /// Reads the persisted selection pointer. The value is stored as a plain
    /// string, not JSON; a missing or unparseable value reads as `None`.
    pub async fn selected_id(&self) -> Option<Uuid> {
        match self.store.get(SELECTED_ACCOUNT_KEY).await {
            Ok(Some(raw)) => match Uuid::parse_str(raw.trim()) {
                Ok(id) => Some(id),
                Err(err) => {
                    tracing::warn!(%err, "discarding malformed selection pointer");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(%err, "selection read failed");
                None
            }
        }
    }

    async fn persist_selection(&self, id: Uuid) {
        if let Err(err) = self.store.set(SELECTED_ACCOUNT_KEY, &id.to_string()).await {
            tracing::warn!(%err, "failed to persist account selection");
        }
    }

    /// Brings the store to a valid baseline: at least one account exists and
    /// the selection points at one of them. Synthesizes the default account on
    /// first run. Idempotent: when state is already valid no write is issued.
    pub async fn ensure_initialized(&self) -> (Vec<Account>, Uuid) {
        let mut accounts = self.list().await;
        if accounts.is_empty() {
            let default = Account::new(DEFAULT_ACCOUNT_NAME);
            tracing::info!(id = %default.id, "synthesizing default account");
            accounts.push(default);
            store::write_json(self.store.as_ref(), ACCOUNTS_KEY, &accounts).await;
            let id = accounts[0].id;
            self.persist_selection(id).await;
            return (accounts, id);
        }

        match self.selected_id().await {
            Some(id) if accounts.iter().any(|account| account.id == id) => (accounts, id),
            // missing or dangling pointer: repoint at the newest account
            _ => {
                let id = accounts[0].id;
                self.persist_selection(id).await;
                (accounts, id)
            }
        }
    }

    /// Creates an account and makes it the current selection. The name is
    /// trimmed; an empty result falls back to a default label.
    pub async fn create(&self, name: &str) -> Account {
        let trimmed = name.trim();
        let label = if trimmed.is_empty() {
            FALLBACK_ACCOUNT_NAME
        } else {
            trimmed
        };
        let account = Account::new(label);
        let mut accounts = self.list().await;
        accounts.insert(0, account.clone());
        store::write_json(self.store.as_ref(), ACCOUNTS_KEY, &accounts).await;
        self.persist_selection(account.id).await;
        account
    }

    /// Renames an account. An empty trimmed name keeps the existing one
    /// rather than erroring. Unknown ids are rejected.
    pub async fn rename(&self, id: Uuid, name: &str) -> RepoResult<Vec<Account>> {
        let mut accounts = self.list().await;
        let account = accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or(FinanceError::AccountNotFound(id))?;
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            account.name = trimmed.to_string();
        }
        store::write_json(self.store.as_ref(), ACCOUNTS_KEY, &accounts).await;
        Ok(accounts)
    }

    /// Deletes an account and its transaction partition. When the deleted
    /// account was selected, the selection moves to the first remaining
    /// account; deleting the last account synthesizes a fresh default so the
    /// list never ends up empty.
    pub async fn delete(&self, id: Uuid) -> RepoResult<(Vec<Account>, Uuid)> {
        let mut accounts = self.list().await;
        let before = accounts.len();
        accounts.retain(|account| account.id != id);
        if accounts.len() == before {
            return Err(FinanceError::AccountNotFound(id));
        }
        store::write_json(self.store.as_ref(), ACCOUNTS_KEY, &accounts).await;
        transactions::remove_partition(self.store.as_ref(), id).await;

        let selected = match self.selected_id().await {
            Some(current) if accounts.iter().any(|account| account.id == current) => current,
            _ => {
                if accounts.is_empty() {
                    let default = Account::new(DEFAULT_ACCOUNT_NAME);
                    tracing::info!(id = %default.id, "last account deleted, synthesizing default");
                    accounts.push(default);
                    store::write_json(self.store.as_ref(), ACCOUNTS_KEY, &accounts).await;
                }
                let next = accounts[0].id;
                self.persist_selection(next).await;
                next
            }
        };
        Ok((accounts, selected))
    }

    /// Moves the selection pointer. Unknown ids are rejected instead of being
    /// written blindly.
    pub async fn switch(&self, id: Uuid) -> RepoResult<()> {
        let accounts = self.list().await;
        if !accounts.iter().any(|account| account.id == id) {
            return Err(FinanceError::AccountNotFound(id));
        }
        self.persist_selection(id).await;
        Ok(())
    }
}
