//! Writes the result table to stdout.

use std::io;

use calm_io::stdoutln;

use crate::adapter::ResultTable;

/// The content type of everything written to stdout
pub const CONTENT_TYPE: &str = "application/json";

/// Prints `table` as a single line of JSON
pub fn print(table: &ResultTable) -> io::Result<()> {
    let json = table.to_json()?;
    tracing::debug!(content_type = CONTENT_TYPE, rows = table.rows().len(), "writing result");
    stdoutln!("{}", json)?;
    Ok(())
}
