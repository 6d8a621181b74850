use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "archmap")]
#[command(about = "Architecture conformance analyzer for annotated codebases", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a source tree against an architecture document
    Analyze {
        /// Root of the source tree to analyze
        path: PathBuf,

        /// Architecture document (plain text)
        #[arg(short = 'd', long = "doc")]
        doc: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to .archmap.toml under the root)
        #[arg(long)]
        config: Option<PathBuf>,

        /// File extensions to analyze (overrides configuration)
        #[arg(long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// Glob patterns to exclude from the walk
        #[arg(long = "ignore", value_delimiter = ',')]
        ignore_patterns: Option<Vec<String>>,

        /// Disable parallel extraction
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Fail instead of continuing when the rule block is malformed
        #[arg(long = "strict-rules")]
        strict_rules: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
        }
    }
}
