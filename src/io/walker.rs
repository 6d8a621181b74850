use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct SourceWalker {
    root: PathBuf,
    extensions: Vec<String>,
    ignore_patterns: Vec<String>,
}

impl SourceWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: vec!["java".to_string()],
            ignore_patterns: vec![],
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Walk the tree and return matching files, sorted for a deterministic
    /// extraction order.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext_str = ext.to_string_lossy();
        if !self.extensions.iter().any(|e| e.as_str() == ext_str) {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "class X {}").unwrap();
    }

    #[test]
    fn walks_only_matching_extensions_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b/Second.java");
        touch(dir.path(), "a/First.java");
        touch(dir.path(), "notes.txt");

        let files = SourceWalker::new(dir.path().to_path_buf()).walk().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["First.java", "Second.java"]);
    }

    #[test]
    fn ignore_patterns_filter_paths() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main/App.java");
        touch(dir.path(), "generated/Stub.java");

        let files = SourceWalker::new(dir.path().to_path_buf())
            .with_ignore_patterns(vec!["**/generated/**".to_string()])
            .walk()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("main/App.java"));
    }

    #[test]
    fn extensionless_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Makefile");
        let files = SourceWalker::new(dir.path().to_path_buf()).walk().unwrap();
        assert!(files.is_empty());
    }
}
