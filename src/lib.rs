#![doc(test(attr(deny(warnings))))]

//! Pocketledger is the local persistence and derived-state core of a personal
//! finance tracker: named accounts, per-account transaction partitions stored
//! as JSON in an asynchronous key-value store, and the aggregation logic that
//! derives running balances and calendar-month income/expense totals.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod session;
pub mod store;
pub mod summary;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("pocketledger=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Pocketledger tracing initialized.");
    });
}
