use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autodocs::pipeline::CancelFlag;

#[derive(Parser)]
#[command(name = "autodocs")]
#[command(
    version,
    about = "AI-driven project documentation generator for codebases"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Document every eligible file and write the project summary
    Generate {
        #[arg(long, help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
    },

    /// Merge collected flowchart fragments into one project flowchart
    Chart {
        #[arg(long, help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
    },

    /// Generate README.md at the project root from the summary
    Readme {
        #[arg(long, help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
    },

    /// Remove cached responses and generated output
    Clean {
        #[arg(long, help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
        #[arg(long, help = "Remove the whole output directory")]
        all: bool,
        #[arg(
            long,
            value_name = "RELATIVE_PATH",
            help = "Invalidate the cache entry for one source file"
        )]
        file: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(long, help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path {
        #[arg(long, help = "Project root (default: current directory)")]
        path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Generate { path } => {
            let cancel = CancelFlag::new();
            let handler_flag = cancel.clone();
            ctrlc::set_handler(move || handler_flag.cancel())?;

            let rt = Runtime::new()?;
            rt.block_on(autodocs::cli::commands::generate::run(path, cancel))?;
        }
        Commands::Chart { path } => {
            let rt = Runtime::new()?;
            rt.block_on(autodocs::cli::commands::chart::run(path))?;
        }
        Commands::Readme { path } => {
            let rt = Runtime::new()?;
            rt.block_on(autodocs::cli::commands::readme::run(path))?;
        }
        Commands::Clean { path, all, file } => {
            autodocs::cli::commands::clean::run(path, all, file)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { path, format } => {
                autodocs::cli::commands::config::show(path, &format)?;
            }
            ConfigAction::Path { path } => {
                autodocs::cli::commands::config::path(path)?;
            }
        },
    }

    Ok(())
}
