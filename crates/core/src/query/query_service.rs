use log::debug;

use chrono::Month;

use crate::constants::{CANNOT_RE_BALANCE, DEFAULT_REBALANCE_LIMIT, NO_BALANCE};
use crate::ledger::ledger_calculator::allocate_by_percent;
use crate::ledger::{Portfolio, Transaction, TransactionKind};
use crate::operations::AssetAmounts;
use crate::query::QueryServiceTrait;

/// Answers balance and rebalance queries.
///
/// `rebalance_limit` is the minimum number of distinct ledger months
/// required before a rebalance is permitted.
pub struct QueryService {
    rebalance_limit: usize,
}

impl QueryService {
    pub fn new(rebalance_limit: usize) -> Self {
        Self { rebalance_limit }
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new(DEFAULT_REBALANCE_LIMIT)
    }
}

impl QueryServiceTrait for QueryService {
    fn balance(&self, portfolio: &Portfolio, month: Month) -> String {
        debug!("balance query for {}", month.name());
        portfolio
            .ledger
            .first_of_kind(month, TransactionKind::AfterMarketChange)
            .map(|transaction| transaction.assets.to_string())
            .unwrap_or_else(|| NO_BALANCE.to_string())
    }

    fn rebalance(&self, portfolio: &mut Portfolio) -> String {
        debug!(
            "rebalance query over {} ledger month(s)",
            portfolio.ledger.month_count()
        );
        if portfolio.ledger.month_count() < self.rebalance_limit {
            return CANNOT_RE_BALANCE.to_string();
        }

        // Last by insertion order, not calendar order.
        let Some(month) = portfolio.ledger.last_month() else {
            return CANNOT_RE_BALANCE.to_string();
        };
        let Some(source) = portfolio
            .ledger
            .first_of_kind(month, TransactionKind::AfterMarketChange)
        else {
            return CANNOT_RE_BALANCE.to_string();
        };

        // The total is redistributed, not recomputed: the floored parts may
        // fall short of it by up to 2 units, and that drift is kept.
        let total = source.total;
        let assets = AssetAmounts::new(
            allocate_by_percent(total, portfolio.initial_equity_percent),
            allocate_by_percent(total, portfolio.initial_debt_percent),
            allocate_by_percent(total, portfolio.initial_gold_percent),
        );
        let rebalanced = Transaction::with_total(TransactionKind::ReBalance, assets, total);
        let formatted = rebalanced.assets.to_string();
        portfolio.ledger.push(month, rebalanced);
        formatted
    }
}
