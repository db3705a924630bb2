use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use qj_cli::tracing_init::init_tracing;
use qj_cli::{cmd_block, cmd_explain, cmd_format, cmd_query};
use qj_config::{OutputConfig, QjConfig};
use qj_core::{qj_error, qj_info};

#[derive(Parser)]
#[command(name = "qj", about = "Query JSON documents with dotted paths and bracket filters")]
struct Cli {
    /// Path to qj.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query against a JSON document
    Query {
        /// Query, e.g. `users[age>=18].{id,name}`
        query: String,

        /// Input file (`-` or omitted for stdin)
        file: Option<PathBuf>,

        /// Print results on a single line
        #[arg(long)]
        compact: bool,

        /// Treat input as newline-delimited JSON
        #[arg(long)]
        ndjson: bool,
    },

    /// Show how a query compiles
    Explain {
        query: String,
    },

    /// Print a qjson block document, optionally querying it
    Block {
        /// Block file
        file: PathBuf,

        /// Query to run against the block's document
        #[arg(short, long)]
        query: Option<String>,

        /// Print results on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Fill `{key}` placeholders from a JSON object
    Format {
        template: String,

        /// Input file (`-` or omitted for stdin)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, base_dir) = match &cli.config {
        Some(path) => {
            let config_path = path
                .canonicalize()
                .map_err(|e| anyhow::anyhow!("config path '{}': {e}", path.display()))?;
            let config = QjConfig::load(&config_path)?;
            let base_dir = config_path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default();
            (config, base_dir)
        }
        None => (QjConfig::default(), std::env::current_dir()?),
    };

    let _guard = init_tracing(&config.logging, &base_dir)?;
    if let Some(path) = &cli.config {
        qj_info!(conf, config = %path.display(), "configuration loaded");
    }

    let result = dispatch(cli.command, config.output);
    if let Err(ref e) = result {
        qj_error!(sys, error = %format!("{e:#}"), "command failed");
    }
    result
}

fn dispatch(command: Commands, mut output: OutputConfig) -> Result<()> {
    match command {
        Commands::Query {
            query,
            file,
            compact,
            ndjson,
        } => {
            output.pretty &= !compact;
            output.ndjson |= ndjson;
            cmd_query::run(&query, file, &output)
        }
        Commands::Explain { query } => cmd_explain::run(&query),
        Commands::Block {
            file,
            query,
            compact,
        } => {
            output.pretty &= !compact;
            cmd_block::run(file, query.as_deref(), &output)
        }
        Commands::Format { template, file } => cmd_format::run(&template, file),
    }
}
