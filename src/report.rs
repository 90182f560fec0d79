use std::io::Write;
use std::path::Path;

use crate::analysis::Analysis;
use crate::dataset::BASE_BUFFER_SIZE;
use crate::error::Result;

/// Writes the human-readable analysis summary. Generic over the writer so
/// tests can capture the exact bytes; `main` points this at stdout.
pub fn write_summary<W: Write>(out: &mut W, analysis: &Analysis, output: &Path) -> Result<()> {
    writeln!(out, "Chart saved to '{}'", output.display())?;
    writeln!(out)?;
    writeln!(out, "Experiment analysis:")?;
    writeln!(
        out,
        "1. Peak transfer rate: {:.2} MB/s @ {} bytes",
        analysis.peak.transfer_rate, analysis.peak.buffer_size
    )?;
    writeln!(
        out,
        "2. Optimal buffer size: {} bytes",
        analysis.optimal.buffer_size
    )?;
    writeln!(
        out,
        "3. Equivalent to {}x the memory page size ({} bytes)",
        analysis.multiplier(),
        BASE_BUFFER_SIZE
    )?;
    writeln!(
        out,
        "4. Reaches {:.1}% of peak performance",
        analysis.percent_of_peak()
    )?;
    writeln!(out)?;
    writeln!(out, "Use the following definition in mycat5.c:")?;
    writeln!(out, "#define OPTIMAL_MULTIPLIER {}", analysis.multiplier())?;
    Ok(())
}
