/// Combined document builder.
///
/// Layout per file block: a blank line, a delimiter, the `FILE:` line,
/// a second delimiter, a blank line, then the content and a newline.
use std::fmt::Write;

pub const TITLE: &str = "# Combined Text Files";
pub const DELIMITER_WIDTH: usize = 80;

/// In-memory combined document.
#[derive(Debug, Clone)]
pub struct CombinedDocument {
    buffer: String,
    file_count: usize,
}

impl CombinedDocument {
    /// Start a document with the title banner and generation timestamp.
    pub fn new(generated_at: &str) -> Self {
        let buffer = format!("{}\n# Generated: {}\n\n", TITLE, generated_at);
        Self {
            buffer,
            file_count: 0,
        }
    }

    /// Append one file block.
    pub fn push_file(&mut self, relative_path: &str, content: &str) {
        let delimiter = "=".repeat(DELIMITER_WIDTH);

        // Formatting into a String cannot fail.
        let _ = write!(
            self.buffer,
            "\n{delimiter}\nFILE: {relative_path}\n{delimiter}\n\n{content}\n"
        );

        self.file_count += 1;
    }

    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}
