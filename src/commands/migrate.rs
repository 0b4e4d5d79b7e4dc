use crate::io;
use crate::io::walker::FileWalker;
use crate::transform::migrate_component;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

pub struct MigrateConfig {
    pub path: PathBuf,
    pub extension: String,
    pub skip: Vec<String>,
}

/// Runs the batch migration: enumerate, rewrite, overwrite, report.
///
/// Returns the number of files processed. The first read or write failure
/// aborts the whole batch; files already processed stay modified and the
/// remainder are left untouched.
pub fn migrate_directory(config: &MigrateConfig) -> Result<usize> {
    let files = FileWalker::new(config.path.clone())
        .with_extension(config.extension.as_str())
        .with_exclusions(config.skip.iter().cloned())
        .walk()?;

    log::debug!(
        "{} candidate files in {}",
        files.len(),
        config.path.display()
    );

    for path in &files {
        let content = io::read_file(path)?;
        let updated = match migrate_component(&content) {
            Some(rewritten) => rewritten,
            None => {
                log::debug!("no svg block in {}, keeping content", path.display());
                content
            }
        };
        // Pass-through files get a no-op rewrite; there is no dirty tracking.
        io::write_file(path, &updated)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("Updated: {}", name.green());
    }

    println!("{}", "All icons updated successfully!".bold());
    Ok(files.len())
}
