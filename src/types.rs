/*!
 * Core types and data structures for srcdump
 */

use std::path::PathBuf;

/// A file encountered while walking a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name
    pub name: String,
    /// Directory path joined with the file name
    pub path: PathBuf,
}

/// One visited directory together with the files directly inside it
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    /// Path of the directory, built from the scan root
    pub path: PathBuf,
    /// Number of separators between the scan root and this directory
    pub depth: usize,
    /// Files in this directory, sorted by name
    pub files: Vec<FileEntry>,
}

impl DirectoryListing {
    /// Last component of the path string, empty if it ends in a separator
    pub fn base_name(&self) -> String {
        base_name(&self.path.to_string_lossy()).to_string()
    }
}

/// Result of reading one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Full text of the file
    Content(String),
    /// Reason the file could not be read
    Failed(String),
}

/// The rendered report: structure section followed by contents section
#[derive(Debug, Clone)]
pub struct ReportDocument {
    /// Indented directory/file listing
    pub structure: String,
    /// Delimited blocks with the contents of matched files
    pub contents: String,
}

impl ReportDocument {
    /// Join both sections into the final report text
    pub fn render(&self) -> String {
        format!("{}\n{}", self.structure, self.contents)
    }
}

pub(crate) fn base_name(path: &str) -> &str {
    match path.rfind(std::path::MAIN_SEPARATOR) {
        Some(idx) => &path[idx + std::path::MAIN_SEPARATOR.len_utf8()..],
        None => path,
    }
}
