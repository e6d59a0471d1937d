/*!
 * srcdump - Snapshot a project's layout and source files into one text report
 *
 * The report starts with an indented tree of every directory and file under
 * the root (version control metadata excluded), followed by the full text of
 * each file with the target extension.
 */

pub mod collector;
pub mod config;
pub mod error;
pub mod scanner;
pub mod types;
pub mod writer;


use std::path::PathBuf;

use tracing::info;

// Re-export main components for easier access
pub use collector::{collect_contents, collect_structure, read_source};
pub use config::Config;
pub use error::{Result, SrcDumpError};
pub use scanner::Scanner;
pub use types::{DirectoryListing, FileEntry, ReadOutcome, ReportDocument};
pub use writer::ReportWriter;

/// Build both report sections for the configured root
pub fn build_report(config: &Config) -> ReportDocument {
    let scanner = Scanner::from_config(config);

    ReportDocument {
        structure: collect_structure(&scanner),
        contents: collect_contents(&scanner, &config.extension),
    }
}

/// Build the report and write it to the configured output file
///
/// Returns the path written. Only a failure to write the report is an error.
pub fn run(config: &Config) -> Result<PathBuf> {
    config.validate()?;

    let document = build_report(config);
    let writer = ReportWriter::new(&config.output_file);
    writer.write(&document)?;

    info!("Report written to {}", writer.output_file().display());
    Ok(writer.output_file().to_path_buf())
}
