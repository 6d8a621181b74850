//! The `analyze` command: drives the conformance pipeline end to end.
//!
//! Stage order is fixed: extraction and document parsing are independent,
//! both feed the mapper, the mapper feeds chain validation and rule
//! evaluation, and everything converges into the report. Each stage only
//! reads its predecessors' output.

use crate::archdoc;
use crate::chains::validate_chains;
use crate::config::ArchmapConfig;
use crate::core::{ConformanceReport, Entity};
use crate::errors::ArchmapError;
use crate::extract::extract_entity;
use crate::io::{self, collect_sources, load_document, SourceFile};
use crate::mapping::map_components;
use crate::report::synthesize_report;
use crate::rules::evaluate_rules;
use anyhow::Result;
use log::{debug, warn};
use rayon::prelude::*;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub doc: PathBuf,
    pub format: crate::io::OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub ignore_patterns: Option<Vec<String>>,
    pub parallel: bool,
    pub strict_rules: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub excerpt_length: usize,
    pub parallel: bool,
    /// With strict rules, a malformed rule block aborts the run instead of
    /// degrading to an empty rule set.
    pub strict_rules: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            excerpt_length: crate::report::DEFAULT_EXCERPT_LENGTH,
            parallel: true,
            strict_rules: false,
        }
    }
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = ArchmapConfig::load(config.config.as_deref(), &config.path)?;
    let extensions = config
        .extensions
        .unwrap_or_else(|| file_config.source_extensions.clone());
    let ignore_patterns = config
        .ignore_patterns
        .unwrap_or_else(|| file_config.ignore_patterns.clone());

    let sources = collect_sources(&config.path, &extensions, &ignore_patterns)?;
    debug!("collected {} source files", sources.len());
    let doc_text = load_document(&config.doc)?;

    let report = run_pipeline(
        &sources,
        &doc_text,
        PipelineOptions {
            excerpt_length: file_config.excerpt_length,
            parallel: config.parallel,
            strict_rules: config.strict_rules,
        },
    )?;

    write_report(&report, config.format, config.output)
}

/// Run the full conformance pipeline over pre-fetched inputs.
pub fn run_pipeline(
    sources: &[SourceFile],
    doc_text: &str,
    options: PipelineOptions,
) -> Result<ConformanceReport> {
    let entities = extract_all(sources, options.parallel);
    debug!("extracted {} entities", entities.len());

    let model = if options.strict_rules {
        archdoc::parse_architecture_doc(doc_text)?
    } else {
        let (model, degraded) = archdoc::parse_architecture_doc_lenient(doc_text);
        if degraded {
            warn!("malformed rule block; continuing with an empty rule set");
        }
        model
    };
    debug!(
        "architecture model: {} components, {} rules",
        model.components.len(),
        model.rules.len()
    );

    let mapped = map_components(&entities, &model.components);
    let chains = validate_chains(&mapped, &entities);
    let verdicts = evaluate_rules(&mapped, &model.rules);
    debug!(
        "{} mapped rows, {} chain edges, {} verdicts",
        mapped.len(),
        chains.len(),
        verdicts.len()
    );

    Ok(synthesize_report(
        &entities,
        &model,
        &mapped,
        &chains,
        &verdicts,
        options.excerpt_length,
    ))
}

/// Extraction is a pure per-file function, so it parallelizes freely; the
/// sorted source order keeps the output deterministic either way.
fn extract_all(sources: &[SourceFile], parallel: bool) -> Vec<Entity> {
    if parallel {
        sources
            .par_iter()
            .map(|source| extract_entity(&source.content, &source.origin))
            .collect()
    } else {
        sources
            .iter()
            .map(|source| extract_entity(&source.content, &source.origin))
            .collect()
    }
}

fn write_report(
    report: &ConformanceReport,
    format: crate::io::OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                io::ensure_dir(parent)?;
            }
            let file = std::fs::File::create(&path)
                .map_err(ArchmapError::Io)?;
            io::create_writer(file, format).write_report(report)
        }
        None => io::create_writer(std::io::stdout(), format).write_report(report),
    }
}
