//! Architecture document fetching. Decoding problems are rejected here, at
//! the boundary, never inside the core.

use crate::errors::{ArchmapError, Result};
use std::fs;
use std::path::Path;

pub fn load_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| ArchmapError::document_unavailable(path, e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| ArchmapError::document_unavailable(path, format!("invalid encoding: {e}")))
}
