use anyhow::Context;
use clap::Args;
use colored::Colorize;

use crate::core::aggregator::{CombineReport, TextAggregator};
use crate::error::AggregateError;
use crate::models::config::CombineConfig;
use crate::utils::file_ops::FileOperations;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DIRECTORY_PROMPT: &str = "Enter the directory path (press Enter for current directory): ";

/// CLI command for combining the text files of a directory tree.
#[derive(Args, Debug, Default)]
pub struct CombineCommand {
    /// Directory to process (prompted for when omitted)
    pub directory: Option<PathBuf>,

    /// YAML file with extensions, ignore_dirs, output_file, exclude_output
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File name suffix to include (repeatable, replaces the default list)
    #[arg(short, long = "ext", value_name = "SUFFIX")]
    pub extensions: Vec<String>,

    /// Directory name to skip (repeatable, replaces the default list)
    #[arg(short, long = "ignore-dir", value_name = "NAME")]
    pub ignore_dirs: Vec<String>,

    /// Output file name, written inside the directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Allow a previous output file to be combined again
    #[arg(long)]
    pub include_output: bool,

    /// List the files that would be combined without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 2 if any file could not be read
    #[arg(long)]
    pub strict: bool,
}

/// What a successful run did.
#[derive(Debug)]
pub enum CombineOutcome {
    Combined(CombineReport),
    DryRun(Vec<PathBuf>),
}

impl CombineOutcome {
    pub fn has_failures(&self) -> bool {
        match self {
            Self::Combined(report) => !report.failures.is_empty(),
            Self::DryRun(_) => false,
        }
    }
}

impl CombineCommand {
    pub fn execute(&self) -> anyhow::Result<CombineOutcome> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.execute_with(&mut stdin.lock(), &mut stdout)
    }

    /// Run the command with explicit prompt input and console output.
    pub fn execute_with(
        &self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<CombineOutcome> {
        let root = self.resolve_root(input, out)?;
        let config = self.build_config()?;

        writeln!(out, "Processing directory: {}", root.display())?;
        let aggregator = TextAggregator::new(&root, config)?;
        let files = aggregator.discover()?;

        if self.dry_run {
            writeln!(out, "Found {} text files (dry run)", files.len())?;
            for path in &files {
                writeln!(out, "  {}", display_relative(&root, path))?;
            }
            return Ok(CombineOutcome::DryRun(files));
        }

        writeln!(out, "Found {} text files to combine", files.len())?;
        let report = aggregator.combine_paths(&files)?;
        print_report(&report, out)?;

        Ok(CombineOutcome::Combined(report))
    }

    /// Determine the root directory from the argument or an interactive prompt.
    ///
    /// An empty answer (or end of input) selects the current directory.
    pub fn resolve_root(
        &self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<PathBuf> {
        let requested = match &self.directory {
            Some(dir) => dir.clone(),
            None => {
                write!(out, "{}", DIRECTORY_PROMPT)?;
                out.flush()?;

                let mut answer = String::new();
                input
                    .read_line(&mut answer)
                    .context("failed to read directory from input")?;
                let answer = answer.trim();
                if answer.is_empty() {
                    std::env::current_dir().context("failed to get current directory")?
                } else {
                    PathBuf::from(answer)
                }
            }
        };

        FileOperations::resolve_directory(&requested)
            .ok_or_else(|| AggregateError::InvalidDirectory { path: requested }.into())
    }

    /// Merge defaults, the optional config file and command line flags.
    pub fn build_config(&self) -> Result<CombineConfig, AggregateError> {
        let mut config = match &self.config {
            Some(path) => CombineConfig::from_yaml_file(path)?,
            None => CombineConfig::default(),
        };

        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if !self.ignore_dirs.is_empty() {
            config.ignore_dirs = self.ignore_dirs.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if self.include_output {
            config.exclude_output = false;
        }

        Ok(config)
    }
}

fn print_report(report: &CombineReport, out: &mut impl Write) -> io::Result<()> {
    for relative in &report.included {
        writeln!(out, "{} {}", "Added:".green(), relative)?;
    }
    for failure in &report.failures {
        writeln!(out, "{}", failure.to_string().red())?;
    }

    writeln!(
        out,
        "\n{} {} files into {}",
        "Successfully combined".green().bold(),
        report.included_count(),
        report.output_path.display()
    )?;

    if !report.failures.is_empty() {
        writeln!(
            out,
            "{}",
            format!("{} files could not be read", report.failures.len()).yellow()
        )?;
    }
    Ok(())
}

pub(crate) fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
