//! Source collection: resolves a code root into in-memory texts before the
//! core runs. Any walk or read failure surfaces as one "source unavailable"
//! condition; the core never sees a partial tree.

use crate::errors::{ArchmapError, Result};
use crate::io::walker::SourceWalker;
use std::fs;
use std::path::{Path, PathBuf};

/// One raw source text tagged with its origin.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub origin: PathBuf,
    pub content: String,
}

pub fn collect_sources(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
) -> Result<Vec<SourceFile>> {
    let paths = SourceWalker::new(root.to_path_buf())
        .with_extensions(extensions.to_vec())
        .with_ignore_patterns(ignore_patterns.to_vec())
        .walk()
        .map_err(|e| ArchmapError::source_unavailable(root, e.to_string()))?;

    paths
        .into_iter()
        .map(|path| {
            let content = fs::read_to_string(&path)
                .map_err(|e| ArchmapError::source_unavailable(&path, e.to_string()))?;
            Ok(SourceFile {
                origin: path,
                content,
            })
        })
        .collect()
}
