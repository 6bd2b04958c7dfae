//! paysplit: replay payment splitter operations and inspect their fees.

mod config;
mod replay;

use anyhow::Context;
use clap::Parser;
use config::CliConfig;
use paysplit_engine::Ledger;
use paysplit_operations::codec::describe;
use paysplit_operations::{
    SplitterCreateOp, SplitterDeleteOp, SplitterPayOp, SplitterPayoutOp, SplitterUpdateOp,
};
use paysplit_utils::{format_amount, init_logging, LogFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paysplit", about = "Payment splitter operation tool")]
struct Cli {
    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and env vars override them.
    #[arg(long, env = "PAYSPLIT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level directive, e.g. "info" or "debug,paysplit_engine=trace".
    #[arg(long, env = "PAYSPLIT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "PAYSPLIT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Apply a JSON array of operations to an in-memory ledger seeded from
    /// the configured accounts, printing one JSON record per operation.
    Replay {
        /// Operations file.
        ops: PathBuf,

        /// Set every operation's fee to the required amount before applying.
        #[arg(long)]
        fill_fees: bool,
    },
    /// Print the required fee and encoded size of each operation in a file.
    Fees {
        /// Operations file.
        ops: PathBuf,
    },
    /// Print the binary field layout of every operation.
    Schema,
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    init_logging(config.log_format, &config.log_level)?;
    if let Some(path) = &cli.config {
        tracing::info!(path = %path.display(), "loaded config");
    }

    match cli.command {
        Command::Replay { ops, fill_fees } => {
            let mut operations = replay::load_operations(&ops)?;
            if fill_fees {
                operations = replay::fill_fees(operations, &config.params.fees)
                    .context("cannot compute required fees")?;
            }
            tracing::info!(ops = operations.len(), file = %ops.display(), "replaying operations");

            let ledger = replay::genesis_ledger(&config);
            let records = replay::replay(&ledger, &config, &operations);
            for record in &records {
                println!("{}", serde_json::to_string(record)?);
            }

            let rejected = records
                .iter()
                .filter(|r| matches!(r, replay::ReplayRecord::Rejected { .. }))
                .count();
            let summary = ledger.summary()?;
            for (asset, held) in &summary.held {
                tracing::info!(%asset, held = %format_amount(*held), "undistributed funds");
            }
            tracing::info!(
                applied = records.len() - rejected,
                rejected,
                splitters = summary.splitters,
                "replay finished"
            );
        }
        Command::Fees { ops } => {
            let operations = replay::load_operations(&ops)?;
            for (index, op) in operations.iter().enumerate() {
                let size = op.encode()?.len();
                let required = op.calculate_fee(&config.params.fees)?;
                println!(
                    "{index:>4}  {:<16} {size:>6} bytes  fee {} (offered {})",
                    op.name(),
                    format_amount(required),
                    format_amount(op.fee().amount),
                );
            }
        }
        Command::Schema => {
            for layout in [
                describe::<SplitterCreateOp>(),
                describe::<SplitterUpdateOp>(),
                describe::<SplitterPayOp>(),
                describe::<SplitterPayoutOp>(),
                describe::<SplitterDeleteOp>(),
            ] {
                println!("{layout}");
            }
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
