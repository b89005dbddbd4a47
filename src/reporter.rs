use crate::error::Result;
use crate::models::AnalysisSummary;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{self, Write};

const INDENT: &[u8] = b"    ";

/// Render the summary as JSON indented by four spaces
pub fn render(summary: &AnalysisSummary) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    summary.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_report<W: Write>(writer: &mut W, summary: &AnalysisSummary) -> Result<()> {
    writeln!(writer, "{}", render(summary)?)?;
    writer.flush()?;
    Ok(())
}

/// Print the summary to stdout
pub fn display(summary: &AnalysisSummary) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, summary)
}
