/// Sentinel returned by a balance query when no market-adjusted transaction
/// exists for the requested month.
pub const NO_BALANCE: &str = "NO_BALANCE";

/// Sentinel returned by a rebalance query when the ledger does not yet hold
/// enough months, or the latest month has no market-adjusted transaction.
pub const CANNOT_RE_BALANCE: &str = "CANNOT_RE_BALANCE";

/// Minimum number of distinct ledger months before a rebalance is permitted.
pub const DEFAULT_REBALANCE_LIMIT: usize = 6;
