use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use whist_core::config::{Config, ConfigPaths};

mod commands;
mod logging;
mod tui;

use logging::LogTarget;

#[derive(Parser, Debug)]
#[command(name = "whist", version, about = "Score sheet for four-player Whist")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default config file
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
    Config {
        #[arg(long)]
        print: bool,
    },
    /// Score one cell: effective round (1-13), bid and tricks taken
    Score {
        #[arg(allow_negative_numbers = true)]
        round: i64,
        #[arg(allow_negative_numbers = true)]
        bid: i64,
        #[arg(allow_negative_numbers = true)]
        tricks: i64,
    },
    /// Show the round table
    Rounds,
    /// Calculate a sheet of raw entries read from a JSON file
    Calc {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Open the interactive score board
    Board,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = ConfigPaths::resolve()?;
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_path.clone());

    if let Commands::Init { path, force } = &cli.command {
        let target = path.clone().unwrap_or(config_path);
        return commands::config::init(&target, *force);
    }

    let config = Config::load_or_default(&config_path).with_context(|| {
        format!("load config at {} (run `whist init` to recreate it)", config_path.display())
    })?;
    let target = match cli.command {
        Commands::Board => LogTarget::FileOnly,
        _ => LogTarget::Stderr,
    };
    logging::init(&config, &paths, cli.verbose, target)?;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Config { print } => {
            if print {
                commands::config::print_effective(&config_path)
            } else {
                Ok(())
            }
        }
        Commands::Score { round, bid, tricks } => commands::score::execute(round, bid, tricks),
        Commands::Rounds => commands::rounds::execute(),
        Commands::Calc { input, json } => commands::calc::execute(&config, &input, json),
        Commands::Board => {
            if !tui::available() {
                return Err(anyhow::anyhow!("the score board needs an interactive terminal"));
            }
            let grand_total = tui::run_tui(&config)?;
            println!("Grand total: {grand_total}");
            Ok(())
        }
    }
}
