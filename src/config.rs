/*!
 * Configuration handling for srcdump
 */

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use clap::Parser;

use crate::error::Result;

/// Name of the report file written into the scanned root
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// Extension of the files whose contents are collected
pub const TARGET_EXTENSION: &str = ".swift";

/// Version control metadata directory, never traversed
pub const EXCLUDED_DIR: &str = ".git";

/// Command-line arguments for srcdump
///
/// The tool takes no options: it always reports on the directory holding
/// its own executable. Whatever is passed, flags included, is accepted and
/// ignored.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "srcdump",
    about = "Write the directory tree and source contents next to this executable into output.txt",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Ignored
    #[clap(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to report on
    pub root: PathBuf,

    /// Report destination
    pub output_file: PathBuf,

    /// File name suffix selecting files for the contents section
    pub extension: String,

    /// Directory name pruned from traversal
    pub excluded_dir: String,
}

impl Config {
    /// Create the default configuration for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output_file: root.join(OUTPUT_FILE_NAME),
            root,
            extension: TARGET_EXTENSION.to_string(),
            excluded_dir: EXCLUDED_DIR.to_string(),
        }
    }

    /// Create the configuration for the directory containing the running executable
    ///
    /// The path the program was invoked by is used as given, so a symlinked
    /// executable reports on the link's directory. A bare command name found
    /// through `PATH` falls back to the resolved executable path.
    pub fn from_executable() -> Result<Self> {
        let exe = match env::args_os().next().map(PathBuf::from) {
            Some(arg0) if arg0.components().count() > 1 => {
                invocation_path(&arg0, &env::current_dir()?)
            }
            _ => env::current_exe()?,
        };
        match exe.parent() {
            Some(dir) if dir != Path::new("") => Ok(Self::new(dir)),
            _ => crate::bail!(
                Config,
                "Executable path has no parent directory: {}",
                exe.display()
            ),
        }
    }

    /// Validate the configuration
    ///
    /// A missing or unreadable root is not an error: it produces empty sections.
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            !self.extension.is_empty(),
            Config,
            "Target extension must not be empty"
        );
        crate::ensure!(
            !self.excluded_dir.is_empty(),
            Config,
            "Excluded directory name must not be empty"
        );

        Ok(())
    }
}

/// Absolute, lexically normalised form of `path` relative to `cwd`
///
/// Symlinks are left untouched; `..` removes the preceding component.
pub fn invocation_path(path: &Path, cwd: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in cwd.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
