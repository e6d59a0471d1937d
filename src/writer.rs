/*!
 * Report writer for srcdump
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SrcDumpError};
use crate::types::ReportDocument;

/// Writes a rendered report to its destination file
pub struct ReportWriter {
    /// Destination, truncated on every write
    output_file: PathBuf,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    /// Destination of the report
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Write the report as UTF-8, replacing any previous file
    pub fn write(&self, document: &ReportDocument) -> Result<()> {
        self.write_text(&document.render())
            .map_err(|source| SrcDumpError::Write {
                path: self.output_file.clone(),
                source,
            })
    }

    fn write_text(&self, text: &str) -> io::Result<()> {
        let file = File::create(&self.output_file)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}
