use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, Level};

use schema_extract::catalog::CatalogSnapshot;
use schema_extract::config::ExtractorConfig;
use schema_extract::error::ExtractError;
use schema_extract::schema_extractor::DdlExtractor;
use schema_extract::types::QualifiedName;

#[derive(Parser)]
#[command(name = "schema-extract")]
#[command(about = "Reconstruct CREATE statements for deployed tables, indexes and views")]
#[command(version = "0.1.0")]
#[command(long_about = "schema-extract rebuilds the CREATE TABLE, CREATE INDEX or CREATE VIEW statement of an object from its catalog metadata and physical storage properties. Only non-default storage properties are emitted.")]
#[command(after_help = "EXAMPLES:
    # Print the statement of a table
    schema-extract -c catalog.json -s SALES -t ORDERS

    # Export the object hierarchy as JSON
    schema-extract -c catalog.json -s SALES -t ORDERS_IDX --tree-file orders_idx.json")]
struct Cli {
    /// Catalog snapshot (JSON) holding object and storage descriptors
    #[arg(short, long, value_name = "FILE")]
    catalog: PathBuf,

    /// Table, index or view name
    #[arg(short, long, value_name = "NAME")]
    table: String,

    /// Schema name
    #[arg(short, long, value_name = "NAME")]
    schema: Option<String>,

    /// Write the schema hierarchy tree as JSON instead of printing the statement
    #[arg(long, value_name = "FILE")]
    tree_file: Option<PathBuf>,

    /// Extractor configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Set log level explicitly
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

#[derive(ValueEnum, Clone, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    info!("Starting schema-extract v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        eprintln!("Extraction failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<(), ExtractError> {
    let config = match &cli.config {
        Some(path) => ExtractorConfig::from_file(path)?,
        None => ExtractorConfig::default(),
    };
    let snapshot = CatalogSnapshot::from_file(&cli.catalog)?;
    let extractor = DdlExtractor::with_config(&snapshot, &snapshot, config);
    let name = QualifiedName::new(cli.schema.as_deref(), &cli.table);

    info!(object = %name, tree_file = ?cli.tree_file, "Schema extraction initiated");

    match &cli.tree_file {
        Some(path) => extractor.schema_tree(&name)?.write_to_file(path)?,
        None => println!("{}", extractor.extract(&name)?),
    }

    Ok(())
}

/// Initialize logging based on CLI configuration; logs go to stderr
fn initialize_logging(cli: &Cli) -> Result<()> {
    let log_level = if let Some(level) = &cli.log_level {
        level.clone().into()
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(cli.verbose)
            .with_line_number(cli.verbose)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(cli.verbose)
            .with_line_number(cli.verbose)
            .init();
    }

    Ok(())
}
