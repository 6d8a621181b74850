use anyhow::Result;
use archmap::cli::{Cli, Commands};
use archmap::commands::{handle_analyze, AnalyzeConfig};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            doc,
            format,
            output,
            config,
            extensions,
            ignore_patterns,
            no_parallel,
            strict_rules,
        } => handle_analyze(AnalyzeConfig {
            path,
            doc,
            format: format.into(),
            output,
            config,
            extensions,
            ignore_patterns,
            parallel: !no_parallel,
            strict_rules,
        }),
    }
}
