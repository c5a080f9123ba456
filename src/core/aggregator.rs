/// Text aggregator: validate, discover, read and format, write.
///
/// A per-file read failure is recorded and skipped. Anything that stops the
/// final document from being written fails the whole run.
use std::path::{Path, PathBuf};

use crate::core::discovery;
use crate::core::document::CombinedDocument;
use crate::error::{AggregateError, FileFailure, Result};
use crate::models::config::CombineConfig;
use crate::utils::file_ops::FileOperations;
use crate::utils::time;

/// Aggregator bound to one root directory.
#[derive(Debug, Clone)]
pub struct TextAggregator {
    root: PathBuf,
    config: CombineConfig,
}

/// Outcome of a successful combine.
#[derive(Debug)]
pub struct CombineReport {
    /// Where the combined document was written
    pub output_path: PathBuf,
    /// Relative paths of the included files, in document order
    pub included: Vec<String>,
    /// Files that were discovered but could not be read
    pub failures: Vec<FileFailure>,
}

impl CombineReport {
    pub fn included_count(&self) -> usize {
        self.included.len()
    }
}

impl TextAggregator {
    /// Create an aggregator for `root`.
    ///
    /// # Returns
    /// * `Err(AggregateError::InvalidDirectory)` if `root` is missing or not a directory
    /// * `Err(AggregateError::InvalidConfig)` if `config` fails validation
    ///
    /// # Examples
    /// ```no_run
    /// use text_combiner::{CombineConfig, TextAggregator};
    /// use std::path::Path;
    ///
    /// let aggregator = TextAggregator::new(Path::new("/tmp/project"), CombineConfig::default()).unwrap();
    /// let report = aggregator.combine().unwrap();
    /// println!("{} files", report.included_count());
    /// ```
    pub fn new(root: &Path, config: CombineConfig) -> Result<Self> {
        if !root.is_dir() {
            return Err(AggregateError::InvalidDirectory {
                path: root.to_path_buf(),
            });
        }
        config.validate().map_err(AggregateError::InvalidConfig)?;

        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.config.output_file)
    }

    /// Discover candidate files in walk order.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        discovery::discover(&self.root, &self.config)
    }

    /// Discover, combine and write the document.
    pub fn combine(&self) -> Result<CombineReport> {
        let files = self.discover()?;
        self.combine_paths(&files)
    }

    /// Combine an already discovered list of files and write the document.
    ///
    /// The document is only written once it is complete.
    pub fn combine_paths(&self, files: &[PathBuf]) -> Result<CombineReport> {
        let (document, included, failures) = self.render(files, &time::now_local());

        let output_path = self.output_path();
        FileOperations::write_atomic(&output_path, document.as_str()).map_err(|source| {
            AggregateError::Write {
                path: output_path.clone(),
                source,
            }
        })?;
        log::info!(
            "Wrote {} files to {}",
            document.file_count(),
            output_path.display()
        );

        Ok(CombineReport {
            output_path,
            included,
            failures,
        })
    }

    /// Read and format `files` into a document without touching the disk.
    ///
    /// # Returns
    /// The document, the relative paths it contains, and the read failures.
    pub fn render(
        &self,
        files: &[PathBuf],
        generated_at: &str,
    ) -> (CombinedDocument, Vec<String>, Vec<FileFailure>) {
        let mut document = CombinedDocument::new(generated_at);
        let mut included = Vec::new();
        let mut failures = Vec::new();

        for path in files {
            match FileOperations::read_text_lossy(path) {
                Ok(content) => {
                    let relative = self.relative_path(path);
                    document.push_file(&relative, &content);
                    included.push(relative);
                }
                Err(source) => {
                    let failure = FileFailure {
                        path: path.clone(),
                        source,
                    };
                    log::debug!("{}", failure);
                    failures.push(failure);
                }
            }
        }

        (document, included, failures)
    }

    fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}
