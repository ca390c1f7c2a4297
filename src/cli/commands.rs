use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ledger-chain")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build an in-memory chain end to end: submit random transactions, seal
    /// blocks, mine them, verify integrity, and print the chain as JSON
    Demo {
        /// Number of blocks to create and mine
        #[arg(long, default_value_t = 3)]
        blocks: usize,
        /// Transactions submitted per block
        #[arg(long, default_value_t = 2)]
        transactions: usize,
        /// Leading zero hex characters required of each block hash
        /// (defaults to the MINING_DIFFICULTY env var, then to 4)
        #[arg(long)]
        difficulty: Option<u32>,
    },
}
