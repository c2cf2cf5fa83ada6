mod commands;

use clap::{Parser, Subcommand};
use msgsplit_core::config::{self, Platform};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "msgsplit",
    version,
    about = "Split long messages into chunks that fit a chat platform's size limit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "msgsplit.toml", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text from a file (or stdin) and print the chunks.
    Split {
        /// Input file. Reads stdin when omitted or "-".
        file: Option<PathBuf>,
        /// Maximum chunk size in bytes (overrides config and platform).
        #[arg(short, long)]
        limit: Option<usize>,
        /// Use the message limit of a platform (telegram, whatsapp, discord, slack).
        #[arg(short, long)]
        platform: Option<Platform>,
        /// Print chunks as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.general.log_level)),
        )
        .init();

    match cli.command {
        Commands::Split {
            file,
            limit,
            platform,
            json,
        } => {
            let opts = commands::SplitOptions {
                file,
                limit,
                platform,
                json,
            };
            commands::split(&cfg, &opts, &mut std::io::stdout().lock())?;
        }
        Commands::Config => {
            commands::show_config(&cfg, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
