//! Tool configuration, loaded from an optional `.archmap.toml`.

use crate::errors::{ArchmapError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = ".archmap.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchmapConfig {
    /// File extensions treated as analyzable source.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Glob patterns excluded from the source walk.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Length, in characters, of the report's verbatim excerpts.
    #[serde(default = "default_excerpt_length")]
    pub excerpt_length: usize,
}

fn default_source_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

fn default_excerpt_length() -> usize {
    crate::report::DEFAULT_EXCERPT_LENGTH
}

impl Default for ArchmapConfig {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
            ignore_patterns: Vec::new(),
            excerpt_length: default_excerpt_length(),
        }
    }
}

impl ArchmapConfig {
    /// Load configuration: an explicit path must exist and parse; otherwise
    /// `.archmap.toml` next to the analyzed root is used when present, and
    /// defaults apply when it is not.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = root.join(CONFIG_FILE_NAME);
                if implicit.is_file() {
                    Self::from_file(&implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ArchmapError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| ArchmapError::Config(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_a_file() {
        let dir = TempDir::new().unwrap();
        let config = ArchmapConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.source_extensions, vec!["java"]);
        assert_eq!(config.excerpt_length, 500);
        assert!(config.ignore_patterns.is_empty());
    }

    #[test]
    fn implicit_file_next_to_root_is_picked_up() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "source_extensions = [\"java\", \"kt\"]\nexcerpt_length = 200\n",
        )
        .unwrap();
        let config = ArchmapConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.source_extensions, vec!["java", "kt"]);
        assert_eq!(config.excerpt_length, 200);
    }

    #[test]
    fn partial_file_keeps_field_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "ignore_patterns = [\"**/generated/**\"]\n").unwrap();
        let config = ArchmapConfig::load(Some(&path), dir.path()).unwrap();
        assert_eq!(config.ignore_patterns, vec!["**/generated/**"]);
        assert_eq!(config.source_extensions, vec!["java"]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = ArchmapConfig::load(Some(Path::new("/nonexistent.toml")), dir.path());
        assert!(matches!(err, Err(ArchmapError::Config(_))));
    }

    #[test]
    fn unparseable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "source_extensions = not-a-list").unwrap();
        assert!(matches!(
            ArchmapConfig::load(Some(&path), dir.path()),
            Err(ArchmapError::Config(_))
        ));
    }
}
