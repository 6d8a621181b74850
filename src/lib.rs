// Export modules for library usage
pub mod archdoc;
pub mod chains;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extract;
pub mod io;
pub mod mapping;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ArchitectureModel, CatalogEntry, ChainEdge, ChainLayer, ConformanceReport, Coverage, Entity,
    MappedComponent, Marker, Outcome, Rule, RuleVerdict,
};

pub use crate::archdoc::{parse_architecture_doc, parse_architecture_doc_lenient};
pub use crate::chains::validate_chains;
pub use crate::commands::{run_pipeline, PipelineOptions};
pub use crate::config::ArchmapConfig;
pub use crate::errors::ArchmapError;
pub use crate::extract::extract_entity;
pub use crate::io::{create_writer, OutputFormat, OutputWriter, SourceFile};
pub use crate::mapping::map_components;
pub use crate::report::synthesize_report;
pub use crate::rules::evaluate_rules;
