//! CLI entry point for the `gn` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use girvan_newman::cli::commands;
use girvan_newman::engine::SplitParams;
use girvan_newman::types::{GnError, DEFAULT_TARGET_COMPONENTS, DEFAULT_TIE_TOLERANCE};

#[derive(Parser)]
#[command(
    name = "gn",
    about = "Girvan-Newman community detection over undirected edge lists"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Line-oriented text
    Text,
    /// JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove high-betweenness edges until the graph splits
    Split {
        /// Path to the edge list (two node ids per line)
        file: PathBuf,
        /// Write components here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Stop once this many components exist
        #[arg(long, default_value_t = DEFAULT_TARGET_COMPONENTS)]
        target: usize,
        /// Maximum number of rounds
        #[arg(long)]
        max_rounds: Option<usize>,
        /// Keep nodes outside the largest component
        #[arg(long)]
        no_prune: bool,
        /// Relative tolerance for scores tying the maximum
        #[arg(long, default_value_t = DEFAULT_TIE_TOLERANCE)]
        tie_tolerance: f64,
    },
    /// Display node, edge and component counts
    Info {
        /// Path to the edge list
        file: PathBuf,
    },
    /// Show the edges with the highest betweenness
    Betweenness {
        /// Path to the edge list
        file: PathBuf,
        /// Number of edges to list
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == OutputFormat::Json;

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Split {
            file,
            output,
            target,
            max_rounds,
            no_prune,
            tie_tolerance,
        } => {
            let params = SplitParams {
                target_components: target,
                max_rounds,
                prune_to_largest: !no_prune,
                tie_tolerance,
            };
            commands::cmd_split(&file, output.as_deref(), params, json)
        }
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Betweenness { file, top } => commands::cmd_betweenness(&file, top, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GnError::Io(_) => 1,
            GnError::Parse { .. } => 2,
            GnError::InvalidParameter { .. } => 3,
            GnError::UnknownNode(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
