use std::path::PathBuf;

use clap::Parser;
use foliosim_core::constants::DEFAULT_REBALANCE_LIMIT;

/// Month-by-month portfolio simulator driven by command files.
///
/// Each file holds one portfolio: an ALLOCATE command, an optional SIP,
/// monthly CHANGE commands, and BALANCE/REBALANCE queries. Query results are
/// printed one per line, with a blank line after each file.
#[derive(Debug, Parser)]
#[command(name = "foliosim", version, about)]
pub struct Config {
    /// Input command files, processed in order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Minimum number of ledger months before REBALANCE is allowed.
    #[arg(long, default_value_t = DEFAULT_REBALANCE_LIMIT)]
    pub rebalance_limit: usize,
}
