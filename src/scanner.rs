/*!
 * Directory traversal shared by both report sections
 *
 * Walks top-down and depth-first, one directory at a time. Each visited
 * directory is yielded with its files already sorted, before any of its
 * subdirectories. The excluded directory is pruned before descent, so
 * nothing beneath it is ever listed.
 */

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::types::{DirectoryListing, FileEntry};

/// Scanner for directory contents
pub struct Scanner {
    /// Directory the walk starts from
    root: PathBuf,
    /// Directory name never descended into
    excluded_dir: String,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(root: impl Into<PathBuf>, excluded_dir: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            excluded_dir: excluded_dir.into(),
        }
    }

    /// Create a scanner for the configured root
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.root, &config.excluded_dir)
    }

    /// Walk the tree, yielding one listing per readable directory
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            scanner: self,
            stack: vec![self.root.clone()],
        }
    }

    /// Number of separators in `dir` once the root prefix is removed
    fn depth_of(&self, dir: &Path) -> usize {
        let root = self.root.to_string_lossy();
        let dir = dir.to_string_lossy();
        let relative = dir.strip_prefix(&*root).unwrap_or(&dir);
        relative.matches(std::path::MAIN_SEPARATOR).count()
    }

    /// List the immediate entries of `dir`, split into subdirectories and files
    ///
    /// Fails if the directory cannot be opened or an entry cannot be read.
    fn list(&self, dir: &Path) -> io::Result<(Vec<PathBuf>, Vec<FileEntry>)> {
        // A file root would otherwise walk as an empty directory
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Not a directory: {}", dir.display()),
            ));
        }

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .collect::<Result<Vec<DirEntry>, walkdir::Error>>()?;

        let mut subdirs = Vec::new();
        let mut files = Vec::new();

        for entry in entries {
            let name = entry.file_name().to_string_lossy().to_string();
            let path = dir.join(entry.file_name());

            if is_dir(&entry) {
                if name != self.excluded_dir {
                    subdirs.push(path);
                }
            } else {
                files.push(FileEntry { name, path });
            }
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));

        Ok((subdirs, files))
    }
}

/// Directories and symlinks that resolve to directories count as subdirectories
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

/// Iterator over the directories of a scan
pub struct Walk<'a> {
    scanner: &'a Scanner,
    stack: Vec<PathBuf>,
}

impl Iterator for Walk<'_> {
    type Item = DirectoryListing;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(dir) = self.stack.pop() {
            let (subdirs, files) = match self.scanner.list(&dir) {
                Ok(listing) => listing,
                Err(e) => {
                    debug!("Skipping unreadable directory {}: {}", dir.display(), e);
                    continue;
                }
            };

            // Linked directories are listed as subdirectories but never entered
            self.stack.extend(
                subdirs
                    .into_iter()
                    .rev()
                    .filter(|path| !path.is_symlink()),
            );

            debug!("Visiting {}", dir.display());
            return Some(DirectoryListing {
                depth: self.scanner.depth_of(&dir),
                path: dir,
                files,
            });
        }

        None
    }
}
