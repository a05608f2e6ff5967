use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::core::Result;

/// Enumerates the regular files under a root directory.
pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
    max_depth: Option<usize>,
    hidden: bool,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
            max_depth: None,
            hidden: false,
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Files under the root, sorted by path.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let patterns = self
            .ignore_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(!self.hidden)
            .git_ignore(true)
            .max_depth(self.max_depth)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && !is_ignored(path, &self.root, &patterns) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }
}

// Patterns match the file name, the path relative to the walk root, or the
// full path.
fn is_ignored(path: &Path, root: &Path, patterns: &[glob::Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    let relative = path
        .strip_prefix(root)
        .map(|p| p.to_string_lossy())
        .unwrap_or_default();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    patterns.iter().any(|p| {
        p.matches(&name) || (!relative.is_empty() && p.matches(&relative)) || p.matches(&path_str)
    })
}

/// Expands a mix of files and directories into a flat file list.
pub fn collect_inputs(
    inputs: &[PathBuf],
    walker: impl Fn(PathBuf) -> FileWalker,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(walker(input.clone()).walk()?);
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}
