//! CSV export for the calculation trace.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::calc::trace::Trace;

/// Column header for trace export.
const HEADER: [&str; 2] = ["label", "value"];

/// Exports a trace to a CSV file at the given path.
///
/// Writes a header row followed by one `label,value` row per trace entry in
/// trace order. Produces deterministic output for identical inputs.
///
/// # Arguments
///
/// * `trace` - Calculation trace
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(trace: &Trace, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(trace, buf)
}

/// Writes a trace as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(trace: &Trace, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for (label, value) in trace.iter() {
        wtr.write_record([label, value.to_string().as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
