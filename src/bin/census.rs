//! Census Binary
//!
//! Classifies every 6-card hand and prints the category table.
//!
//! Options: --mode, --batch, --workers, --json, --verify

use clap::Parser;
use sixcard::census::Census;
use sixcard::census::Config;
use sixcard::census::Frequency;
use sixcard::census::reference;
use sixcard::classify::Mode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Evaluation mode. Runs inclusive then exclusive when omitted.
    #[arg(long, value_enum)]
    mode: Option<Mode>,
    /// Hands per batch
    #[arg(long, default_value_t = sixcard::BATCH_SIZE)]
    batch: usize,
    /// Worker threads
    #[arg(long, default_value_t = sixcard::N_WORKERS)]
    workers: usize,
    /// Print counts as JSON instead of a table
    #[arg(long)]
    json: bool,
    /// Fail unless the exclusive counts match the published table
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    sixcard::log()?;
    let args = Args::parse();
    let census = Census::from(Config::new(args.batch, args.workers)?);
    let modes = match args.mode {
        Some(mode) => vec![mode],
        None => Mode::all().to_vec(),
    };
    anyhow::ensure!(
        !args.verify || modes.contains(&Mode::Exclusive),
        "--verify needs an exclusive run"
    );
    let mut tables = serde_json::Map::new();
    for mode in modes {
        let frequency = census.run(mode)?;
        if args.verify && mode == Mode::Exclusive {
            verify(&frequency)?;
        }
        if args.json {
            tables.insert(mode.to_string(), serde_json::to_value(frequency)?);
        } else {
            println!("\n{}\n{}", mode, frequency);
        }
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
    }
    Ok(())
}

fn verify(frequency: &Frequency) -> anyhow::Result<()> {
    let discrepancies = frequency.discrepancies(&reference::SIX_CARD);
    for (category, expected, actual) in discrepancies.iter() {
        log::error!(
            "{:<32}{:<32}",
            category.to_string(),
            format!("expected {} found {}", expected, actual)
        );
    }
    match discrepancies.len() {
        0 => Ok(log::info!("{:<32}{:<32}", "verified", "matches published counts")),
        n => Err(anyhow::anyhow!("{} categories differ from published counts", n)),
    }
}
