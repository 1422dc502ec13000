//! CLI entry point for the `lexq` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use lexigraph::cli::{self, commands};
use lexigraph::config::load_engine_config;
use lexigraph::engine::QueryEngine;
use lexigraph::types::{ErrorKind, LexError, MeaningType};

#[derive(Parser)]
#[command(
    name = "lexq",
    about = "Lexigraph CLI — fuzzy lookup, wildcard lookup and meaning resolution over a lexical graph snapshot"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Engine configuration file (TOML). Falls back to $LEXQ_CONFIG, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a snapshot file
    Info {
        /// Path to the snapshot file
        file: PathBuf,
    },
    /// Show a vertex and its edges
    Get {
        /// Path to the snapshot file
        file: PathBuf,
        /// Vertex ID
        vertex_id: u64,
    },
    /// Forms within an edit distance of a word (the word itself excluded)
    Fuzzy {
        /// Path to the snapshot file
        file: PathBuf,
        /// The word to look up
        word: String,
        /// Maximum Levenshtein distance
        #[arg(allow_negative_numbers = true)]
        max_distance: i64,
    },
    /// Forms matching a wildcard pattern (% = any run, _ = one character)
    Pattern {
        /// Path to the snapshot file
        file: PathBuf,
        /// The wildcard pattern
        pattern: String,
    },
    /// Show the meaning-root paths of a word (word is a wildcard pattern)
    Roots {
        /// Path to the snapshot file
        file: PathBuf,
        /// The word or pattern
        word: String,
    },
    /// Resolve the meanings of a word for one meaning type
    Resolve {
        /// Path to the snapshot file
        file: PathBuf,
        /// The word or pattern
        word: String,
        /// Meaning type: sense, category, definition, example, relation, or a numeric tag
        #[arg(name = "type", allow_negative_numbers = true)]
        meaning_type: String,
    },
    /// Detailed statistics about the graph
    Stats {
        /// Path to the snapshot file
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = cli::default_log_filter(verbose);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), LexError> {
    let json = cli.format == "json";
    let engine = QueryEngine::with_config(load_engine_config(cli.config.as_deref())?);

    match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Get { file, vertex_id } => commands::cmd_get(&file, vertex_id, json),
        Commands::Fuzzy {
            file,
            word,
            max_distance,
        } => commands::cmd_fuzzy(&file, &engine, &word, max_distance, json),
        Commands::Pattern { file, pattern } => {
            commands::cmd_pattern(&file, &engine, &pattern, json)
        }
        Commands::Roots { file, word } => commands::cmd_roots(&file, &engine, &word, json),
        Commands::Resolve {
            file,
            word,
            meaning_type,
        } => {
            let mt = MeaningType::parse(&meaning_type)?;
            commands::cmd_resolve(&file, &engine, &word, mt, json)
        }
        Commands::Stats { file } => commands::cmd_stats(&file, &engine, json),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = match (&e, e.kind()) {
            (LexError::Io(_), _) => 1,
            (_, ErrorKind::Data) => 2,
            (_, ErrorKind::InvalidArgument) => 3,
            (_, ErrorKind::Unavailable) => 4,
        };
        process::exit(code);
    }
}
