pub mod accounts;
pub mod transactions;

pub use accounts::AccountRepository;
pub use transactions::TransactionRepository;

use crate::errors::FinanceError;

pub type RepoResult<T> = Result<T, FinanceError>;
