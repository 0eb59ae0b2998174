//! Foliosim Core - portfolio ledger simulation engine.
//!
//! Builds a month-keyed transaction ledger from an ordered list of user
//! commands (allocation, SIP contributions, monthly market changes) and
//! answers balance and rebalance queries against it. All monetary math is
//! fixed-point decimal with floor truncation.

pub mod constants;
pub mod errors;
pub mod ledger;
pub mod operations;
pub mod query;

// Re-export common types from the ledger and operations modules
pub use ledger::*;
pub use operations::*;
pub use query::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
