use anyhow::Context;
use clap::{Parser, Subcommand};
use moodscan_lib::config::{
    config_path, default_data_dir, history_dir, init_json_config, load_json_config,
};
use moodscan_lib::{FileKvStore, MoodScanner, RandomSelector, ScannerConfig, SystemClock};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "moodscan", version, about = "Scan your mood from a line of text")]
struct Cli {
    /// Config file (defaults to <data-dir>/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the config and the scan history
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify text and save it to history
    Scan {
        #[arg(required = true)]
        text: Vec<String>,
        /// Seed quote selection for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show saved scans, newest first
    History,
    /// Delete all saved scans
    Clear,
    /// Write a default config file
    Init {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn open_scanner(config_path: &Path, data_dir: &Path) -> MoodScanner {
    let config: ScannerConfig = load_json_config(config_path, "moodscan");
    MoodScanner::from_config(
        &config,
        Arc::new(FileKvStore::new(history_dir(data_dir))),
        Arc::new(SystemClock),
    )
}

fn main() -> anyhow::Result<()> {
    moodscan_lib::logging::init_logging();
    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config_path = cli.config.unwrap_or_else(|| config_path(&data_dir));

    match cli.command {
        Command::Scan { text, seed } => {
            let scanner = open_scanner(&config_path, &data_dir);
            let text = text.join(" ");
            let outcome = match seed {
                Some(seed) => scanner.scan(&text, &mut RandomSelector::seeded(seed)),
                None => scanner.scan(&text, &mut RandomSelector::new()),
            };
            let r = &outcome.result;
            println!("{} {}", r.emoji, r.label);
            if let Some(score) = r.score {
                println!("score: {score}/100");
            }
            if !r.keywords.is_empty() {
                println!("keywords: {}", r.keywords.join(", "));
            }
            println!("\"{}\"", r.quote);
            if let Err(e) = &outcome.persisted {
                eprintln!("warning: scan not saved: {e}");
            }
        }
        Command::History => {
            let entries = open_scanner(&config_path, &data_dir).history();
            if entries.is_empty() {
                println!("No scans yet.");
            }
            for entry in entries {
                let when = chrono::DateTime::from_timestamp_millis(entry.timestamp)
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| entry.timestamp.to_string());
                println!("{when}  {} {:<10} {}", entry.emoji, entry.label, entry.quote);
            }
        }
        Command::Clear => {
            open_scanner(&config_path, &data_dir)
                .clear_history()
                .context("failed to clear scan history")?;
            println!("History cleared.");
        }
        Command::Init { force } => {
            let written =
                init_json_config(&config_path, &ScannerConfig::default(), force, "moodscan")
                    .context("failed to write config file")?;
            if written {
                println!("Wrote {}", config_path.display());
            } else {
                println!(
                    "{} already exists (use --force to replace it)",
                    config_path.display()
                );
            }
        }
    }

    Ok(())
}
