pub mod document;
pub mod output;
pub mod sources;
pub mod walker;

pub use document::load_document;
pub use output::{create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter};
pub use sources::{collect_sources, SourceFile};
pub use walker::SourceWalker;

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
