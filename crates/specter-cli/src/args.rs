//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use specter::Clause;

/// Specification-pattern filtering and design-principle demos.
///
/// ## Examples
///
/// Green products from the built-in catalog:
///   specter filter --where color=green
///
/// Big products that are not green, as JSON:
///   specter filter --where size=big --exclude color=green --format json
///
/// Small or blue products from a file:
///   specter filter --catalog products.yaml --any size=small --any color=blue
///
/// A journal saved to disk:
///   specter journal -e "I cried" -e "I know" --save j1.txt --overwrite
#[derive(Parser, Debug)]
#[command(name = "specter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (logs are written to stderr)
    #[arg(
        long,
        global = true,
        value_enum,
        env = "SPECTER_LOG_LEVEL",
        default_value = "warn"
    )]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter a product catalog by color and size
    Filter(FilterArgs),
    /// Build a journal and optionally save it
    Journal(JournalArgs),
    /// Compare rectangle and square areas
    Shapes(ShapesArgs),
    /// Run a document through single-purpose and composed devices
    Devices(DevicesArgs),
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Catalog file (.json, .yaml or .yml); the built-in sample if omitted
    #[arg(long, env = "SPECTER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Clause every product must satisfy, e.g. "color=green" or "size!=big"
    #[arg(short = 'w', long = "where", value_name = "CLAUSE")]
    pub and: Vec<Clause>,

    /// Clause of which at least one must match
    #[arg(long = "any", value_name = "CLAUSE")]
    pub or: Vec<Clause>,

    /// Clause no product may match
    #[arg(long = "exclude", value_name = "CLAUSE")]
    pub not: Vec<Clause>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct JournalArgs {
    /// Entry text, added in order
    #[arg(short, long = "entry", value_name = "TEXT")]
    pub entries: Vec<String>,

    /// Zero-based index of an entry to remove, applied after all entries are
    /// added and one after another
    #[arg(long = "remove", value_name = "INDEX")]
    pub remove: Vec<usize>,

    /// File to save the journal to
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Replace the file if it already exists
    #[arg(long, requires = "save")]
    pub overwrite: bool,
}

#[derive(Args, Debug)]
pub struct ShapesArgs {
    /// Rectangle width
    #[arg(long, default_value = "2")]
    pub width: u32,

    /// Rectangle height
    #[arg(long, default_value = "3")]
    pub height: u32,

    /// Square side
    #[arg(long, default_value = "4")]
    pub side: u32,
}

#[derive(Args, Debug)]
pub struct DevicesArgs {
    /// Title of the document to process
    #[arg(long, default_value = "document")]
    pub title: String,
}

/// Output format for filter results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One product per line
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Log level argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
