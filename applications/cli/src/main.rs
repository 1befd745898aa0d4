/// Encore - listening session simulator
use anyhow::Context;
use clap::{Parser, Subcommand};
use encore_cli::{CliConfig, LibrarySummary};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore")]
#[command(about = "Replay listening commands against a music library", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ENCORE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command list and write the results
    Run {
        /// Library JSON file
        #[arg(short, long)]
        library: PathBuf,
        /// Command list JSON file
        #[arg(short = 'i', long)]
        commands: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load a library and print what it contains
    Check {
        /// Library JSON file
        #[arg(short, long)]
        library: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate()?;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Run {
            library,
            commands,
            output,
        } => run(&config, &library, &commands, output)?,
        Commands::Check { library } => check(&library)?,
    }

    Ok(())
}

fn run(
    config: &CliConfig,
    library: &Path,
    commands: &Path,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let outputs = encore_cli::run(library, commands, config)
        .with_context(|| format!("Failed to replay {}", commands.display()))?;
    let rendered = encore_cli::render(&outputs, config.output.pretty)?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} records to {}", outputs.len(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn check(library: &Path) -> anyhow::Result<()> {
    let library = encore_cli::load_library(library)
        .with_context(|| format!("Failed to load {}", library.display()))?;
    let summary = LibrarySummary::of(&library);

    println!("Tracks:   {}", summary.tracks);
    println!("Podcasts: {} ({} episodes)", summary.podcasts, summary.episodes);
    println!("Users:    {}", summary.users);

    Ok(())
}
