use plotters::coord::combinators::LogCoord;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::iter::once;
use std::path::Path;

use crate::analysis::Analysis;
use crate::dataset::{axis_ticks, Sample};
use crate::error::{BufplotError, Result};

/// Font file probed for CJK glyphs in the title and axis labels.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc";

const CJK_FAMILY: &str = "Noto Sans CJK SC";
const FALLBACK_FAMILY: &str = "sans-serif";

// 12x8 inches at 300 DPI
const IMAGE_WIDTH: u32 = 3600;
const IMAGE_HEIGHT: u32 = 2400;

const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);

/// Picks the font family for the chart text. The CJK font is best-effort:
/// when the file is missing we warn and render with the default family
/// instead of failing the run.
pub fn resolve_font(font_path: &Path) -> &'static str {
    if font_path.is_file() {
        CJK_FAMILY
    } else {
        eprintln!(
            "Warning: font file '{}' not found, falling back to '{}'",
            font_path.display(),
            FALLBACK_FAMILY
        );
        FALLBACK_FAMILY
    }
}

/// Renders the buffer size vs transfer rate chart and writes it to `output`.
///
/// X axis is log scale base 2 with one tick per power-of-two buffer size in
/// the data. The peak sample gets red dashed reference lines, the optimal
/// sample green ones at the 95% threshold, both with leader-line callouts.
pub fn render_chart(
    samples: &[Sample],
    analysis: &Analysis,
    output: &Path,
    font: &str,
) -> Result<()> {
    if samples.is_empty() {
        return Err(BufplotError::EmptyDataset);
    }

    let points: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.buffer_size as f64, s.transfer_rate))
        .collect();

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(0.0, f64::max);
    let y_max = analysis.peak.transfer_rate * 1.12;

    let root = BitMapBackend::new(output, (IMAGE_WIDTH, IMAGE_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BufplotError::Chart(e.to_string()))?;

    // Pad the x range so the first and last markers are not clipped while
    // keeping every power of two between x_min and x_max as a tick.
    let mut chart = ChartBuilder::on(&root)
        .caption("缓冲区大小与传输速率关系", (font, 56))
        .margin(40)
        .x_label_area_size(160)
        .y_label_area_size(140)
        .build_cartesian_2d(
            (x_min * 0.75..x_max * 1.3).log_scale().base(2.0),
            0.0..y_max,
        )
        .map_err(|e| BufplotError::Chart(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("缓冲区大小 (字节)")
        .y_desc("传输速率 (MB/s)")
        .axis_desc_style((font, 36))
        .x_labels(axis_ticks().len())
        .x_label_formatter(&|v: &f64| format!("{:.0}", v))
        .x_label_style((font, 24).into_font().transform(FontTransform::Rotate90))
        .y_label_style((font, 24))
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.08))
        .draw()
        .map_err(|e| BufplotError::Chart(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            ROYAL_BLUE.stroke_width(4),
        ))
        .map_err(|e| BufplotError::Chart(e.to_string()))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, 10, ROYAL_BLUE.filled())),
        )
        .map_err(|e| BufplotError::Chart(e.to_string()))?;

    let peak = (
        analysis.peak.buffer_size as f64,
        analysis.peak.transfer_rate,
    );
    let optimal = (
        analysis.optimal.buffer_size as f64,
        analysis.optimal.transfer_rate,
    );
    let threshold = analysis.threshold();

    // Dashed cross-hairs: red through the peak point, green through the
    // optimal buffer size and the 95% threshold rate.
    draw_dashed(&mut chart, [(peak.0, 0.0), (peak.0, y_max)], &RED)?;
    draw_dashed(&mut chart, [(x_min * 0.75, peak.1), (x_max * 1.3, peak.1)], &RED)?;
    draw_dashed(&mut chart, [(optimal.0, 0.0), (optimal.0, y_max)], &GREEN)?;
    draw_dashed(
        &mut chart,
        [(x_min * 0.75, threshold), (x_max * 1.3, threshold)],
        &GREEN,
    )?;

    let peak_label = format!("峰值性能: {:.2} MB/s", peak.1);
    let peak_sub = format!("@ {} 字节", analysis.peak.buffer_size);
    annotate(
        &mut chart,
        peak,
        (peak.0 * 0.7, peak.1 * 0.9),
        &peak_label,
        &peak_sub,
        y_max,
        font,
    )?;

    let optimal_label = format!("最佳缓冲区大小: {} 字节", analysis.optimal.buffer_size);
    let optimal_sub = format!("达到 {:.1}% 峰值性能", analysis.percent_of_peak());
    annotate(
        &mut chart,
        optimal,
        (optimal.0 * 1.5, peak.1 * 0.7),
        &optimal_label,
        &optimal_sub,
        y_max,
        font,
    )?;

    root.present().map_err(|e| {
        BufplotError::OutputWrite(format!("{}: {}", output.display(), e))
    })?;

    Ok(())
}

type ExperimentChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<LogCoord<f64>, RangedCoordf64>>;

fn draw_dashed(
    chart: &mut ExperimentChart<'_, '_>,
    line: [(f64, f64); 2],
    color: &RGBColor,
) -> Result<()> {
    chart
        .draw_series(DashedLineSeries::new(
            line.into_iter(),
            12,
            10,
            color.mix(0.7).stroke_width(3),
        ))
        .map_err(|e| BufplotError::Chart(e.to_string()))?;
    Ok(())
}

fn annotate(
    chart: &mut ExperimentChart<'_, '_>,
    point: (f64, f64),
    text_at: (f64, f64),
    line1: &str,
    line2: &str,
    y_max: f64,
    font: &str,
) -> Result<()> {
    chart
        .draw_series(once(PathElement::new(
            vec![text_at, point],
            BLACK.stroke_width(2),
        )))
        .map_err(|e| BufplotError::Chart(e.to_string()))?;
    chart
        .draw_series(once(Text::new(
            line1.to_string(),
            text_at,
            (font, 30).into_font(),
        )))
        .map_err(|e| BufplotError::Chart(e.to_string()))?;
    // Second annotation line sits just under the first.
    chart
        .draw_series(once(Text::new(
            line2.to_string(),
            (text_at.0, text_at.1 - y_max * 0.035),
            (font, 30).into_font(),
        )))
        .map_err(|e| BufplotError::Chart(e.to_string()))?;
    Ok(())
}
