/*!
 * Builders for the two report sections
 */

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::scanner::Scanner;
use crate::types::ReadOutcome;

/// First line of the structure section
pub const STRUCTURE_HEADER: &str = "Struttura del progetto:";

/// Marker repeated to frame each file block
pub const SEPARATOR_CHAR: char = '=';

/// Width of the separator lines
pub const SEPARATOR_WIDTH: usize = 40;

const INDENT: &str = "    ";

/// Build the indented listing of every directory and file under the scanner root
pub fn collect_structure(scanner: &Scanner) -> String {
    let mut lines = vec![STRUCTURE_HEADER.to_string()];

    for dir in scanner.walk() {
        let indent = INDENT.repeat(dir.depth);
        lines.push(format!("{}{}/", indent, dir.base_name()));
        for file in &dir.files {
            lines.push(format!("{}{}{}", indent, INDENT, file.name));
        }
    }

    lines.join("\n")
}

/// Build the contents section for files whose name ends with `extension`
///
/// Matching ignores case. A file that cannot be read gets an inline error
/// line in place of its content.
pub fn collect_contents(scanner: &Scanner, extension: &str) -> String {
    let separator = SEPARATOR_CHAR.to_string().repeat(SEPARATOR_WIDTH);
    let mut lines = vec![format!("\n{}", contents_header(extension))];
    let extension = extension.to_lowercase();

    for dir in scanner.walk() {
        for file in dir
            .files
            .iter()
            .filter(|f| f.name.to_lowercase().ends_with(&extension))
        {
            lines.push(format!("\n{}", separator));
            lines.push(format!("File: {}", file.path.display()));
            lines.push(separator.clone());
            match read_source(&file.path) {
                ReadOutcome::Content(text) => lines.push(text),
                ReadOutcome::Failed(reason) => {
                    lines.push(format!("Errore nell'apertura del file: {}", reason))
                }
            }
        }
    }

    lines.join("\n")
}

/// Header line of the contents section
pub fn contents_header(extension: &str) -> String {
    format!("Contenuti dei file {}:", extension)
}

/// Read a file as UTF-8 text with newlines normalised to `\n`
pub fn read_source(path: &Path) -> ReadOutcome {
    match fs::read_to_string(path) {
        Ok(text) => ReadOutcome::Content(normalize_newlines(&text)),
        Err(e) => {
            debug!("Failed to read {}: {}", path.display(), e);
            ReadOutcome::Failed(e.to_string())
        }
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
