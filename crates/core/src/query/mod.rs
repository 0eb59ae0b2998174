//! Balance and rebalance queries over a built ledger.

mod query_service;
mod query_traits;

pub use query_service::*;
pub use query_traits::*;
