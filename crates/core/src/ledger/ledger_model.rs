//! Ledger domain models: transactions, the month-keyed ledger, and the
//! portfolio that owns them.

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::operations::AssetAmounts;

/// Kind of a derived ledger transaction.
///
/// A single month's list only ever grows in this order:
/// `Allocation` (first month only) → `Existing` → `AfterSip` (optional) →
/// `AfterMarketChange` → `ReBalance` (query-triggered, last month only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Allocation,
    Existing,
    AfterSip,
    AfterMarketChange,
    ReBalance,
}

/// One derived monetary transaction.
///
/// `total` is the sum of the asset amounts at the moment it was computed;
/// it is not refreshed automatically when `assets` changes. Callers mutate
/// assets first and then call [`Transaction::update_total`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub kind: TransactionKind,
    pub assets: AssetAmounts,
    pub total: Decimal,
}

impl Transaction {
    /// Creates a transaction with `total` computed from the assets.
    pub fn new(kind: TransactionKind, assets: AssetAmounts) -> Self {
        let mut transaction = Self {
            kind,
            assets,
            total: Decimal::ZERO,
        };
        transaction.update_total();
        transaction
    }

    /// Creates a transaction carrying an externally supplied total. Used by
    /// rebalancing, where the total is redistributed rather than recomputed
    /// from the floored parts.
    pub fn with_total(kind: TransactionKind, assets: AssetAmounts, total: Decimal) -> Self {
        Self {
            kind,
            assets,
            total,
        }
    }

    /// Recomputes `total` from the current assets and returns it.
    pub fn update_total(&mut self) -> Decimal {
        self.total = self.assets.sum();
        self.total
    }
}

/// Insertion-ordered ledger of per-month transaction lists.
///
/// Months are kept as an ordered sequence of `(Month, transactions)` entries
/// with an auxiliary index map for O(1) lookup. Insertion order, not
/// calendar order, decides which month is "last" for rebalancing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthLedger {
    entries: Vec<MonthEntry>,
    #[serde(skip)]
    index: HashMap<Month, usize>,
}

/// All transactions recorded for one month, in append order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
    pub month: Month,
    pub transactions: Vec<Transaction>,
}

impl MonthLedger {
    /// Appends a transaction to `month`'s list, creating the month entry at
    /// the end of the sequence on first appearance.
    pub fn push(&mut self, month: Month, transaction: Transaction) {
        match self.index.get(&month) {
            Some(&position) => self.entries[position].transactions.push(transaction),
            None => {
                self.index.insert(month, self.entries.len());
                self.entries.push(MonthEntry {
                    month,
                    transactions: vec![transaction],
                });
            }
        }
    }

    /// Transactions recorded for `month`; empty if the month is absent.
    pub fn transactions(&self, month: Month) -> &[Transaction] {
        self.index
            .get(&month)
            .map(|&position| self.entries[position].transactions.as_slice())
            .unwrap_or(&[])
    }

    /// First transaction of `kind` in `month`'s list.
    pub fn first_of_kind(&self, month: Month, kind: TransactionKind) -> Option<&Transaction> {
        self.transactions(month)
            .iter()
            .find(|transaction| transaction.kind == kind)
    }

    /// Month keys in insertion order.
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.entries.iter().map(|entry| entry.month)
    }

    /// Most recently inserted month.
    pub fn last_month(&self) -> Option<Month> {
        self.entries.last().map(|entry| entry.month)
    }

    pub fn month_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MonthEntry] {
        &self.entries
    }
}

/// A portfolio: the target allocation percentages derived from the initial
/// allocation, and the ledger built from the change operations.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub initial_equity_percent: Decimal,
    pub initial_debt_percent: Decimal,
    pub initial_gold_percent: Decimal,
    pub ledger: MonthLedger,
}
