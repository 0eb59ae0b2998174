//! Builds the month-keyed transaction ledger from parsed operations.

use log::debug;

use crate::errors::{Error, Result};
use crate::ledger::ledger_calculator::{apply_percent_change, percent_of_total};
use crate::ledger::{MonthLedger, Portfolio, Transaction, TransactionKind};
use crate::operations::{AssetAmounts, MarketChange, Operation};

/// Walks the ordered operations once and populates `portfolio` in place:
/// target percentages from the `Allocate` amounts, then one ledger pass over
/// the `Change` operations. Called exactly once per portfolio.
///
/// Fails with [`Error::MissingOperation`] when no `Allocate` is present.
/// With zero `Change` operations the ledger stays empty and every query
/// answers with its sentinel.
pub fn build_ledger(portfolio: &mut Portfolio, operations: &[Operation]) -> Result<()> {
    let allocation = operations
        .iter()
        .find_map(|operation| match operation {
            Operation::Allocate(amounts) => Some(*amounts),
            _ => None,
        })
        .ok_or_else(|| Error::MissingOperation("ALLOCATE".to_string()))?;

    let sip = operations.iter().find_map(|operation| match operation {
        Operation::Sip(amounts) => Some(*amounts),
        _ => None,
    });

    let changes: Vec<&MarketChange> = operations
        .iter()
        .filter_map(|operation| match operation {
            Operation::Change(change) => Some(change),
            _ => None,
        })
        .collect();

    let total = allocation.sum();
    portfolio.initial_equity_percent = percent_of_total(total, allocation.equity);
    portfolio.initial_debt_percent = percent_of_total(total, allocation.debt);
    portfolio.initial_gold_percent = percent_of_total(total, allocation.gold);

    let Some(first_change) = changes.first() else {
        debug!("no market changes supplied; ledger left empty");
        return Ok(());
    };

    // The allocation seeds the ledger under the first change month and is
    // the starting "previous" of the fold.
    let seed = Transaction::new(TransactionKind::Allocation, allocation);
    let mut previous = seed.clone();
    portfolio.ledger.push(first_change.month, seed);

    for (index, change) in changes.iter().enumerate() {
        // SIP is never applied on the very first change month.
        let contribution = if index >= 1 { sip.as_ref() } else { None };
        previous = apply_change(&mut portfolio.ledger, previous, change, contribution);
    }

    debug!("ledger built: {} month(s)", portfolio.ledger.month_count());
    Ok(())
}

/// One fold step: records `Existing`, the optional `AfterSip`, and the
/// `AfterMarketChange` transactions for this change month, and returns the
/// market-adjusted transaction as the next "previous".
fn apply_change(
    ledger: &mut MonthLedger,
    previous: Transaction,
    change: &MarketChange,
    contribution: Option<&AssetAmounts>,
) -> Transaction {
    let existing = Transaction::new(TransactionKind::Existing, previous.assets);
    ledger.push(change.month, existing.clone());

    let base = match contribution {
        Some(sip) => {
            let after_sip = Transaction::new(TransactionKind::AfterSip, previous.assets + *sip);
            ledger.push(change.month, after_sip.clone());
            after_sip
        }
        None => existing,
    };

    let moved = AssetAmounts::new(
        apply_percent_change(base.assets.equity, change.equity_percent),
        apply_percent_change(base.assets.debt, change.debt_percent),
        apply_percent_change(base.assets.gold, change.gold_percent),
    );
    let after_market = Transaction::new(TransactionKind::AfterMarketChange, moved);
    ledger.push(change.month, after_market.clone());
    after_market
}
