/// Candidate file discovery.
///
/// Walks the tree depth-first with entries sorted by file name, so the order
/// is stable across runs. Ignored directories are cut off in `filter_entry`,
/// before the walker reads them.
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::models::config::CombineConfig;

/// Find every candidate file under `root`.
///
/// # Arguments
/// * `root` - Directory to walk (must already be validated)
/// * `config` - Allow-list, ignore-list and output settings
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` with paths in walk order
/// * `Err(AggregateError::Walk)` if any directory cannot be read
pub fn discover(root: &Path, config: &CombineConfig) -> Result<Vec<PathBuf>> {
    let output_path = config
        .exclude_output
        .then(|| root.join(&config.output_file));

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, config));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        // Symlinks count when they point at a file.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && path.is_file());
        if !is_file {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };
        if !config.matches_extension(&name.to_string_lossy()) {
            continue;
        }

        if output_path.as_deref() == Some(path) {
            log::debug!("Skipping previous output: {}", path.display());
            continue;
        }

        log::debug!("Discovered: {}", path.display());
        files.push(path.to_path_buf());
    }

    Ok(files)
}

fn is_pruned(entry: &DirEntry, config: &CombineConfig) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let pruned = config.is_ignored_dir(&entry.file_name().to_string_lossy());
    if pruned {
        log::debug!("Pruned directory: {}", entry.path().display());
    }
    pruned
}
