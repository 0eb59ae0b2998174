//! Operation domain models.

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A parsed input command, one per logical input line.
///
/// The sequence handed to the ledger builder must contain exactly one
/// `Allocate` (before any `Change`) and at most one `Sip`; `Change`
/// operations arrive in chronological order with no duplicate month. The
/// builder does not re-sort or deduplicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Initial one-time split of capital across the three asset classes.
    Allocate(AssetAmounts),
    /// Fixed monthly contribution per asset class, applied from the second
    /// change month onward.
    Sip(AssetAmounts),
    /// Market movement percentages for one month.
    Change(MarketChange),
    /// Balance query for a month; not state-changing.
    Balance { month: Month },
    /// Rebalance query; always targets the most recent ledger month.
    ReBalance,
}

/// Amounts per asset class. Values are integral currency units; the model
/// has no fractional sub-unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAmounts {
    pub equity: Decimal,
    pub debt: Decimal,
    pub gold: Decimal,
}

impl AssetAmounts {
    pub fn new(equity: Decimal, debt: Decimal, gold: Decimal) -> Self {
        Self { equity, debt, gold }
    }

    /// Sum of the three asset amounts.
    pub fn sum(&self) -> Decimal {
        self.equity + self.debt + self.gold
    }
}

impl Add for AssetAmounts {
    type Output = AssetAmounts;

    fn add(self, rhs: AssetAmounts) -> AssetAmounts {
        AssetAmounts {
            equity: self.equity + rhs.equity,
            debt: self.debt + rhs.debt,
            gold: self.gold + rhs.gold,
        }
    }
}

impl fmt::Display for AssetAmounts {
    /// Query output format: `"<equity> <debt> <gold>"`, no separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.equity.normalize(),
            self.debt.normalize(),
            self.gold.normalize()
        )
    }
}

/// Market movement for one month: signed percentage per asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketChange {
    pub month: Month,
    pub equity_percent: Decimal,
    pub debt_percent: Decimal,
    pub gold_percent: Decimal,
}
