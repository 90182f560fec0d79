use clap::Parser;
use std::io;
use std::path::PathBuf;

use bufplot::{measurements, render_chart, resolve_font, write_summary, Analysis, Result};

#[derive(Parser)]
#[command(name = "bufplot")]
#[command(about = "Buffer size vs transfer rate chart for the mycat5 experiment", long_about = None)]
#[command(version)]
struct Cli {
    /// Path of the rendered chart image
    #[arg(short, long, default_value = "bs_performance.png")]
    output: PathBuf,

    /// CJK font file to use for chart text (falls back to sans-serif if missing)
    #[arg(long, default_value = bufplot::DEFAULT_FONT_PATH)]
    font: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let samples = measurements();
    let analysis = Analysis::from_samples(&samples)?;

    let font = resolve_font(&cli.font);
    render_chart(&samples, &analysis, &cli.output, font)?;

    // Only report once the image is actually on disk.
    write_summary(&mut io::stdout(), &analysis, &cli.output)?;

    Ok(())
}
