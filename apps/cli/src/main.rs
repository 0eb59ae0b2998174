mod config;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;

use config::Config;
use foliosim_core::ledger::{build_ledger, Portfolio};
use foliosim_core::operations::{parse_input, Operation};
use foliosim_core::query::{QueryService, QueryServiceTrait};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();
    let queries: Arc<dyn QueryServiceTrait> = Arc::new(QueryService::new(config.rebalance_limit));

    for path in &config.files {
        simulate_file(path, queries.as_ref())
            .with_context(|| format!("failed to simulate {}", path.display()))?;
        println!();
    }
    Ok(())
}

/// Runs one command file: parse every line, build the portfolio ledger, then
/// answer the queries in input order.
fn simulate_file(path: &Path, queries: &dyn QueryServiceTrait) -> anyhow::Result<()> {
    let input = fs::read_to_string(path)?;
    let operations = parse_input(&input)?;
    info!(
        "loaded {} operation(s) from {}",
        operations.len(),
        path.display()
    );

    let mut portfolio = Portfolio::default();
    build_ledger(&mut portfolio, &operations)?;

    for operation in &operations {
        match operation {
            Operation::Balance { month } => println!("{}", queries.balance(&portfolio, *month)),
            Operation::ReBalance => println!("{}", queries.rebalance(&mut portfolio)),
            _ => {}
        }
    }
    Ok(())
}
