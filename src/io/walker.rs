use anyhow::{bail, Result};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Enumerates candidate component files directly inside a directory.
///
/// The walk is flat (depth 1) and the file list is captured once up front, so
/// files created mid-run are never picked up.
pub struct FileWalker {
    root: PathBuf,
    extension: String,
    exclusions: HashSet<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "svelte".to_string(),
            exclusions: HashSet::new(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_exclusions(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.exclusions = names.into_iter().collect();
        self
    }

    /// Returns matching files sorted by path so the processing order is
    /// deterministic across platforms.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            bail!("{} is not a directory", self.root.display());
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .max_depth(Some(1))
            .hidden(false)
            .git_ignore(false)
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
        let matches_extension = path
            .extension()
            .map(|ext| ext.to_string_lossy() == self.extension)
            .unwrap_or(false);
        if !matches_extension {
            return false;
        }

        path.file_name()
            .map(|name| !self.exclusions.contains(name.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }
}
