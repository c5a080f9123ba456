/// Configuration model for text aggregation.
///
/// This module defines which files are combined, which directories are
/// pruned, and where the combined document is written.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AggregateError, ConfigFileError};

/// File name suffixes included by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".txt",
    ".md",
    ".js",
    ".ts",
    ".jsx",
    ".tsx",
    ".json",
    ".html",
    ".css",
    ".scss",
    ".vue",
    ".svg",
    ".yml",
    ".yaml",
    ".gitignore",
    ".eslintrc",
    ".env.example",
    ".babelrc",
];

/// Directory names pruned from traversal by default.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &["node_modules", "dist", "build", ".git", ".idea", ".vscode"];

pub const DEFAULT_OUTPUT_FILE: &str = "combined_text_files.txt";

/// Aggregation configuration.
///
/// Every field has a default, so a YAML file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    /// Case-insensitive file name suffixes (e.g. [".md", ".json"])
    pub extensions: Vec<String>,

    /// Directory names that are never descended into
    pub ignore_dirs: Vec<String>,

    /// Name of the combined document, written inside the root directory
    pub output_file: String,

    /// Whether the previous combined document is skipped during discovery
    pub exclude_output: bool,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            exclude_output: true,
        }
    }
}

impl CombineConfig {
    /// Load a configuration from a YAML file.
    ///
    /// Missing keys fall back to the defaults.
    ///
    /// # Examples
    /// ```no_run
    /// use text_combiner::models::config::CombineConfig;
    /// use std::path::Path;
    ///
    /// let config = CombineConfig::from_yaml_file(Path::new("combine.yaml")).unwrap();
    /// assert!(!config.extensions.is_empty());
    /// ```
    pub fn from_yaml_file(path: &Path) -> Result<Self, AggregateError> {
        let wrap = |source: ConfigFileError| AggregateError::ConfigFile {
            path: path.to_path_buf(),
            source,
        };

        let content = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        Self::from_yaml_str(&content).map_err(|e| wrap(e.into()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a struct.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Validate the configuration.
    ///
    /// # Returns
    /// * `Ok(())` if configuration is valid
    /// * `Err(Vec<String>)` with every validation error found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.extensions.is_empty() {
            errors.push("Extension list cannot be empty".to_string());
        }
        for (idx, ext) in self.extensions.iter().enumerate() {
            if ext.is_empty() {
                errors.push(format!("Extension at index {} is empty", idx));
            }
        }

        for (idx, dir) in self.ignore_dirs.iter().enumerate() {
            if dir.is_empty() {
                errors.push(format!("Ignored directory at index {} is empty", idx));
            } else if has_separator(dir) {
                errors.push(format!(
                    "Ignored directory '{}' must be a name, not a path",
                    dir
                ));
            }
        }

        if self.output_file.is_empty() {
            errors.push("Output file name cannot be empty".to_string());
        } else if has_separator(&self.output_file)
            || self.output_file == "."
            || self.output_file == ".."
        {
            errors.push(format!(
                "Output file '{}' must be a plain file name",
                self.output_file
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Check whether a file name ends with one of the allowed suffixes.
    ///
    /// Matching is case-insensitive: `README.MD` matches `.md`.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.extensions
            .iter()
            .any(|ext| name.ends_with(&ext.to_lowercase()))
    }

    /// Check whether a directory name is on the ignore list.
    pub fn is_ignored_dir(&self, dir_name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == dir_name)
    }
}

fn has_separator(name: &str) -> bool {
    name.contains('/') || name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = CombineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_file, "combined_text_files.txt");
        assert!(config.exclude_output);
    }

    #[test]
    fn test_matches_extension_case_insensitive() {
        let config = CombineConfig::default();

        assert!(config.matches_extension("README.MD"));
        assert!(config.matches_extension("notes.Txt"));
        assert!(config.matches_extension("package.json"));
        assert!(!config.matches_extension("script.py"));
        assert!(!config.matches_extension("Makefile"));
    }

    #[test]
    fn test_matches_dotfile_and_compound_suffixes() {
        let config = CombineConfig::default();

        assert!(config.matches_extension(".gitignore"));
        assert!(config.matches_extension(".env.example"));
        assert!(config.matches_extension(".babelrc"));
        assert!(!config.matches_extension(".env"));
    }

    #[test]
    fn test_custom_extension_list() {
        let config = CombineConfig {
            extensions: vec![".py".to_string()],
            ..CombineConfig::default()
        };

        assert!(config.matches_extension("script.py"));
        assert!(!config.matches_extension("README.md"));
    }

    #[test]
    fn test_is_ignored_dir_exact_name() {
        let config = CombineConfig::default();

        assert!(config.is_ignored_dir("node_modules"));
        assert!(config.is_ignored_dir(".git"));
        assert!(!config.is_ignored_dir("node_modules_backup"));
        assert!(!config.is_ignored_dir("src"));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = CombineConfig {
            extensions: vec![],
            ignore_dirs: vec!["".to_string(), "a/b".to_string()],
            output_file: "../out.txt".to_string(),
            exclude_output: true,
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 4, "got: {:?}", errors);
        assert!(errors.iter().any(|e| e.contains("Extension list cannot be empty")));
        assert!(errors.iter().any(|e| e.contains("index 0 is empty")));
        assert!(errors.iter().any(|e| e.contains("'a/b'")));
        assert!(errors.iter().any(|e| e.contains("plain file name")));
    }

    #[test]
    fn test_validate_rejects_empty_output_name() {
        let config = CombineConfig {
            output_file: String::new(),
            ..CombineConfig::default()
        };

        let errors = config.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Output file name cannot be empty")));
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = CombineConfig::from_yaml_str("extensions: [\".rs\", \".toml\"]\n").unwrap();

        assert_eq!(config.extensions, vec![".rs", ".toml"]);
        assert_eq!(config.ignore_dirs, CombineConfig::default().ignore_dirs);
        assert_eq!(config.output_file, DEFAULT_OUTPUT_FILE);
    }

    #[test]
    fn test_from_yaml_empty_document() {
        let config = CombineConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(config, CombineConfig::default());
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let temp = TempDir::new().unwrap();
        let result = CombineConfig::from_yaml_file(&temp.path().join("missing.yaml"));

        assert!(matches!(result, Err(AggregateError::ConfigFile { .. })));
    }

    #[test]
    fn test_from_yaml_file_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yaml");
        fs::write(&path, "extensions: {not: [a list").unwrap();

        let result = CombineConfig::from_yaml_file(&path);
        assert!(matches!(
            result,
            Err(AggregateError::ConfigFile {
                source: ConfigFileError::Yaml(_),
                ..
            })
        ));
    }
}
