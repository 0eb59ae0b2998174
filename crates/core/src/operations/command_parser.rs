//! Parses command lines into typed [`Operation`] values.
//!
//! Commands are case-insensitive; every line is lowercased before
//! tokenizing. Percentages accept an optional trailing `%`. Months are
//! full English names or three-letter abbreviations.

use chrono::Month;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};
use crate::operations::{AssetAmounts, MarketChange, Operation};

/// Parses a whole input text, one command per line. Blank lines are skipped.
pub fn parse_input(input: &str) -> Result<Vec<Operation>> {
    let mut operations = Vec::new();
    for line in input.lines() {
        if let Some(operation) = parse_line(line)? {
            operations.push(operation);
        }
    }
    Ok(operations)
}

/// Parses a single command line. Returns `None` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<Operation>> {
    let lowered = line.trim().to_lowercase();
    if lowered.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let operation = match tokens[0] {
        "allocate" => Operation::Allocate(parse_amounts("allocate", &tokens[1..])?),
        "sip" => Operation::Sip(parse_amounts("sip", &tokens[1..])?),
        "change" => {
            expect_arguments("change", &tokens[1..], 4)?;
            Operation::Change(MarketChange {
                month: parse_month(tokens[4])?,
                equity_percent: parse_percent(tokens[1])?,
                debt_percent: parse_percent(tokens[2])?,
                gold_percent: parse_percent(tokens[3])?,
            })
        }
        "balance" => {
            expect_arguments("balance", &tokens[1..], 1)?;
            Operation::Balance {
                month: parse_month(tokens[1])?,
            }
        }
        "rebalance" => {
            expect_arguments("rebalance", &tokens[1..], 0)?;
            Operation::ReBalance
        }
        other => return Err(ValidationError::UnknownCommand(other.to_string()).into()),
    };
    Ok(Some(operation))
}

fn expect_arguments(keyword: &str, arguments: &[&str], expected: usize) -> Result<()> {
    if arguments.len() != expected {
        return Err(ValidationError::InvalidInput(format!(
            "{} expects {} argument(s), got {}",
            keyword,
            expected,
            arguments.len()
        ))
        .into());
    }
    Ok(())
}

fn parse_amounts(keyword: &str, arguments: &[&str]) -> Result<AssetAmounts> {
    expect_arguments(keyword, arguments, 3)?;
    Ok(AssetAmounts::new(
        parse_amount(arguments[0])?,
        parse_amount(arguments[1])?,
        parse_amount(arguments[2])?,
    ))
}

/// Amounts are unsigned integral currency units.
fn parse_amount(token: &str) -> Result<Decimal> {
    let amount = Decimal::from_str(token)?;
    if amount.is_sign_negative() || !amount.fract().is_zero() {
        return Err(ValidationError::InvalidInput(format!(
            "amount must be a non-negative integer: {}",
            token
        ))
        .into());
    }
    Ok(amount)
}

/// Percentages are signed decimals with an optional trailing `%`.
fn parse_percent(token: &str) -> Result<Decimal> {
    let digits = token.strip_suffix('%').unwrap_or(token);
    Ok(Decimal::from_str(digits)?)
}

fn parse_month(token: &str) -> Result<Month> {
    let month = match token {
        "january" | "jan" => Month::January,
        "february" | "feb" => Month::February,
        "march" | "mar" => Month::March,
        "april" | "apr" => Month::April,
        "may" => Month::May,
        "june" | "jun" => Month::June,
        "july" | "jul" => Month::July,
        "august" | "aug" => Month::August,
        "september" | "sep" => Month::September,
        "october" | "oct" => Month::October,
        "november" | "nov" => Month::November,
        "december" | "dec" => Month::December,
        _ => return Err(ValidationError::UnknownMonth(token.to_string()).into()),
    };
    Ok(month)
}
