use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordtree::dictionary::{self, STDIN_PATH};

mod complete;
mod inspect;
mod interactive;

use complete::{execute_complete, CompleteArgs};
use inspect::{execute_check, execute_dump, execute_stats, CheckArgs, StatsArgs};
use interactive::{execute_interactive, InteractiveArgs};

/// Word completion from a dictionary file.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Suggests completions for partial words from a dictionary."
)]
struct Cli {
    /// Newline-delimited word list, or `-` to read it from stdin.
    #[arg(short, long, global = true, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print completions for a prefix.
    Complete(CompleteArgs),
    /// Report whether words are in the dictionary.
    Check(CheckArgs),
    /// Print dictionary statistics.
    Stats(StatsArgs),
    /// Print the whole tree.
    Dump,
    /// Complete the last word of each line typed on stdin.
    Interactive(InteractiveArgs),
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to create log file {}", path.display()))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    debug!("{:?}", cli);

    if matches!(cli.command, Command::Interactive(_)) && cli.dictionary.as_os_str() == STDIN_PATH
    {
        anyhow::bail!("interactive mode reads input from stdin, give the dictionary as a file");
    }

    let source = dictionary::source_for(&cli.dictionary);
    let (tree, report) = dictionary::load_dictionary(source.as_ref())
        .await
        .context("Failed to load dictionary")?;

    if tree.is_empty() {
        info!("Dictionary {} has no usable words", source.describe());
    }

    match cli.command {
        Command::Complete(args) => execute_complete(&tree, args)?,
        Command::Check(args) => execute_check(&tree, args)?,
        Command::Stats(args) => execute_stats(&tree, &report, args)?,
        Command::Dump => execute_dump(&tree),
        Command::Interactive(args) => execute_interactive(&tree, args).await?,
    }

    Ok(())
}
