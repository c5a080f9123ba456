/// File operation utilities for text aggregation.
///
/// Reads are lossy and scoped per call; writes replace the target atomically.
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

/// File operations wrapper.
pub struct FileOperations;

impl FileOperations {
    /// Read a file as text, replacing malformed UTF-8 with U+FFFD.
    ///
    /// The handle is closed before returning, on success and on error.
    pub fn read_text_lossy(path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    /// Write content to `path` through a temporary sibling file and a rename.
    ///
    /// Either the complete content ends up at `path` or `path` is left as it
    /// was. The temporary file is removed on failure. An existing target keeps
    /// its permissions; a new one gets the umask default, like `fs::write`.
    /// A symlinked target is written through: the link's destination is
    /// replaced and the link itself stays.
    ///
    /// # Examples
    /// ```no_run
    /// use text_combiner::utils::file_ops::FileOperations;
    /// use std::path::Path;
    ///
    /// FileOperations::write_atomic(Path::new("/tmp/out.txt"), "content").unwrap();
    /// ```
    pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
        let target = Self::resolve_write_target(path);
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = Self::temp_builder().tempfile_in(dir)?;
        if let Ok(metadata) = fs::metadata(&target) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }

    /// Follow a symlinked output path to the file it points at.
    ///
    /// Dangling links and regular paths are returned unchanged.
    fn resolve_write_target(path: &Path) -> PathBuf {
        match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
            }
            _ => path.to_path_buf(),
        }
    }

    #[cfg(unix)]
    fn temp_builder() -> Builder<'static, 'static> {
        use std::os::unix::fs::PermissionsExt;

        // Requested mode is masked by the process umask at creation.
        let mut builder = Builder::new();
        builder.permissions(fs::Permissions::from_mode(0o666));
        builder
    }

    #[cfg(not(unix))]
    fn temp_builder() -> Builder<'static, 'static> {
        Builder::new()
    }

    /// Turn user input into an absolute directory path.
    ///
    /// Relative paths are joined onto the current directory; symlinks are
    /// kept as given.
    ///
    /// # Returns
    /// * `Some(PathBuf)` if the path exists and is a directory
    /// * `None` otherwise
    pub fn resolve_directory(input: &Path) -> Option<PathBuf> {
        if !input.is_dir() {
            return None;
        }
        std::path::absolute(input).ok()
    }
}
