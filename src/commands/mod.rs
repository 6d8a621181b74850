pub mod analyze;

pub use analyze::{handle_analyze, run_pipeline, AnalyzeConfig, PipelineOptions};
