// License: MIT

use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::StrataError;
use crate::parser::{self, ParseReport};
use crate::section::{Property, Section};
use crate::writer;

mod access;
mod conversion;

/// The root of a configuration tree and the entry point for load/save.
///
/// A document is structurally a nameless section: it holds root-level
/// properties and the top-level sections, and owns the whole tree for its
/// lifetime. All dotted-path addressing available on `Section` is exposed
/// here against the root.
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Section,
}

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Document { root: Section::new("") }
    }

    /// Parse a document from a string, no file I/O involved.
    pub fn from_str(content: &str) -> (Self, ParseReport) {
        let mut doc = Document::new();
        let report = doc.parse_str(content);
        (doc, report)
    }

    /// Replace this document's contents with a fresh parse of `content`.
    pub fn parse_str(&mut self, content: &str) -> ParseReport {
        self.close();
        parser::parse_lines(content.lines(), &mut self.root)
    }

    /// Load a configuration file, discarding any existing tree first.
    ///
    /// The old contents are cleared before the file is touched, so an
    /// unreadable path leaves an empty document behind the returned
    /// `FileError` — never a merge, never a stale tree. `~/` expands to
    /// the home directory.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<ParseReport, StrataError> {
        self.close();

        let path = resolve_config_path(path.as_ref());
        let content = fs::read_to_string(&path).map_err(|e| StrataError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.display().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Ok(parser::parse_lines(content.lines(), &mut self.root))
    }

    /// Serialize the tree to a file. Does not mutate the document.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StrataError> {
        let path = resolve_config_path(path.as_ref());
        let file = fs::File::create(&path).map_err(|e| StrataError::FileError {
            message: format!("Failed to create file: {}", e),
            path: path.display().to_string(),
            hint: Some("Check that the directory exists and is writable".into()),
            code: Some(302),
        })?;

        let mut out = BufWriter::new(file);
        writer::write_document(self, &mut out)
            .and_then(|_| out.flush())
            .map_err(|e| StrataError::file_error(
                format!("Failed to write file: {}", e),
                path.display().to_string(),
            ))
    }

    /// Reset to an empty tree.
    ///
    /// Saving is never implicit; anything not written out before this call
    /// is gone.
    pub fn close(&mut self) {
        self.root.clear();
    }

    /// Serialize the tree to a string.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = writer::write_document(self, &mut buf);
        String::from_utf8(buf).unwrap_or_default()
    }

    pub fn root(&self) -> &Section {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    // --- dotted-path addressing against the root ---

    pub fn get(&self, path: &str) -> Option<&Property> {
        self.root.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut Property> {
        self.root.get_mut(path)
    }

    pub fn get_section(&self, path: &str) -> Option<&Section> {
        self.root.get_subsection(path)
    }

    pub fn get_section_mut(&mut self, path: &str) -> Option<&mut Section> {
        self.root.get_subsection_mut(path)
    }

    pub fn has_property(&self, path: &str) -> bool {
        self.root.has_property(path)
    }

    pub fn has_section(&self, path: &str) -> bool {
        self.root.has_subsection(path)
    }

    pub fn add_property(&mut self, path: &str, property: Property) {
        self.root.add_property(path, property)
    }

    pub fn add_section(&mut self, path: &str) -> Option<&mut Section> {
        self.root.add_subsection(path)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Expand `~/` against the home directory; other paths pass through
/// untouched.
fn resolve_config_path(path: &Path) -> PathBuf {
    if let Some(raw) = path.to_str() {
        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
    }
    path.to_path_buf()
}
