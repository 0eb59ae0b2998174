//! Fixed-point arithmetic for ledger construction.
//!
//! All helpers run at `rust_decimal`'s full 28-digit precision and truncate
//! exactly once, at the end of the computation. Truncation is always floor
//! (toward negative infinity), never toward zero; the two differ whenever
//! the fractional part is negative.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ONE_HUNDRED: Decimal = dec!(100);

/// Share of `part` in `total`, as a percentage at full precision.
///
/// No rounding is applied; this feeds the portfolio's initial target
/// percentages. A zero total yields zero.
pub fn percent_of_total(total: Decimal, part: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    part / total * ONE_HUNDRED
}

/// Applies a signed market-change percentage to an amount:
/// `floor(previous + previous * percent / 100)`.
pub fn apply_percent_change(previous: Decimal, percent: Decimal) -> Decimal {
    (previous + previous * percent / ONE_HUNDRED).floor()
}

/// Allocates a share of a total by percentage: `floor(total * percent / 100)`.
pub fn allocate_by_percent(total: Decimal, percent: Decimal) -> Decimal {
    (total * percent / ONE_HUNDRED).floor()
}
