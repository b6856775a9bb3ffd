//! Fixed-format rendering of scanned trace statistics.

use std::io::Write;

use anyhow::{anyhow, Result};

use crate::stats::TraceStats;

const DUMP_HEADER: &str = "==== Malloc statistics dump: block size, amount ====";
const DUMP_FOOTER: &str = "====================================================";

/// Write the statistics report in its fixed textual form.
///
/// Histogram rows appear in ascending size order, one
/// tab-indented `<size>\t<count>` row per distinct size, framed by
/// the dump borders and followed by the four summary lines.
pub fn write_report<W: Write>(writer: &mut W, stats: &TraceStats) -> Result<()> {
    writeln!(writer, "{DUMP_HEADER}")?;
    for (size, count) in &stats.histogram {
        writeln!(writer, "\t{size}\t{count}")?;
    }
    writeln!(writer, "{DUMP_FOOTER}")?;

    writeln!(writer, "Lines parsed : {}", stats.lines_parsed)?;
    writeln!(writer, "Mallocs called : {}", stats.malloc_calls)?;
    writeln!(writer, "Frees called : {}", stats.free_calls)?;
    writeln!(writer, "Realloc called : {}", stats.realloc_calls)?;

    writer.flush()?;
    Ok(())
}

/// Render the report into a string (useful for tests and snapshots).
pub fn render_report(stats: &TraceStats) -> Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, stats)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered report is not valid UTF-8"))
}
