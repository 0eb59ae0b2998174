//! Query surface over a built portfolio ledger.

use chrono::Month;

use crate::ledger::Portfolio;

/// Answers point-in-time queries against a portfolio's ledger.
///
/// Both methods return the formatted asset triple
/// `"<equity> <debt> <gold>"`, or a sentinel string when no qualifying data
/// exists. Sentinels are ordinary values, not errors.
pub trait QueryServiceTrait: Send + Sync {
    /// Assets after the market change of `month`, or
    /// [`crate::constants::NO_BALANCE`].
    fn balance(&self, portfolio: &Portfolio, month: Month) -> String;

    /// Redistributes the latest month's total back to the initial target
    /// percentages, appending the resulting transaction to that month's
    /// list, or returns [`crate::constants::CANNOT_RE_BALANCE`].
    fn rebalance(&self, portfolio: &mut Portfolio) -> String;
}
