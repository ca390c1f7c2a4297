// Demo entry point: drives the ledger engine end to end from the command
// line. The engine itself is in-memory and single-writer, so each invocation
// builds a fresh chain.

use clap::Parser;
use ledger_chain::{Blockchain, Command, Opt, GLOBAL_CONFIG};
use log::{error, info, LevelFilter};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Demo {
            blocks,
            transactions,
            difficulty,
        } => {
            let difficulty = match difficulty {
                Some(d) => d,
                None => GLOBAL_CONFIG.get_mining_difficulty()?,
            };

            let mut chain = Blockchain::new();
            let mut rng = rand::thread_rng();

            for _ in 0..blocks {
                for _ in 0..transactions {
                    let amount = rng.gen_range(1..=10_000);
                    let sender = random_party(&mut rng);
                    let recipient = random_party(&mut rng);
                    chain.submit_transaction(amount, &sender, &recipient);
                }

                // Each new block links to the stored hash of the current tip;
                // the genesis block has no predecessor to reference.
                let pre_block_hash = chain
                    .last_block()
                    .map(|block| block.get_hash().to_string())
                    .unwrap_or_else(|| String::from("0"));
                chain.create_block(0, &pre_block_hash, "")?;

                let index = chain.len() as u64 - 1;
                let nonce = chain.mine_block_with_difficulty(index, difficulty)?;
                let block = chain.block(index)?;
                println!(
                    "Block {} mined: nonce = {}, hash = {}",
                    block.get_index(),
                    nonce,
                    block.get_hash()
                );
            }

            if chain.verify_chain_integrity()? {
                info!("Chain integrity verified across {} blocks", chain.len());
            } else {
                return Err("Chain integrity check failed".into());
            }

            println!("{}", serde_json::to_string_pretty(chain.blocks())?);
        }
    }
    Ok(())
}

fn random_party(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}
