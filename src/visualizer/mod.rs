use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::{error::ExportError, model::movie::MovieRecord};

pub mod charts;

use charts::{ChartSeries, RATING_BINS, TOP_DIRECTORS};

const BAR_WIDTH: usize = 40;

pub fn build_charts(movies: &[MovieRecord]) -> Vec<ChartSeries> {
    vec![
        charts::rating_histogram(movies, RATING_BINS),
        charts::year_counts(movies),
        charts::top_directors(movies, TOP_DIRECTORS),
    ]
}

/// Renders the three charts to `out`, and writes each series as CSV into `chart_dir` if given.
pub fn visualize<W: Write>(
    movies: &[MovieRecord],
    out: &mut W,
    chart_dir: Option<&Path>,
) -> Result<(), ExportError> {
    for chart in build_charts(movies) {
        render_text_chart(&chart, out)?;
        if let Some(dir) = chart_dir {
            save_series_to_csv(&chart, &dir.join(format!("{}.csv", chart.name)))?;
        }
    }
    Ok(())
}

pub fn render_text_chart<W: Write>(chart: &ChartSeries, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", chart.title)?;
    writeln!(out, "{} | {}", chart.x_label, chart.y_label)?;

    let max = chart.bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let label_width = chart
        .bars
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, count) in &chart.bars {
        let len = if max == 0 { 0 } else { count * BAR_WIDTH / max };
        let padding = label_width - label.chars().count();
        writeln!(
            out,
            "{}{} | {} {}",
            label,
            " ".repeat(padding),
            "#".repeat(len),
            count
        )?;
    }
    writeln!(out)
}

pub fn save_series_to_csv(chart: &ChartSeries, file_name: &Path) -> Result<(), ExportError> {
    let csv_error = |source| ExportError::Csv {
        path: file_name.to_path_buf(),
        source,
    };

    let mut wrt = Writer::from_path(file_name).map_err(csv_error)?;
    wrt.write_record([chart.x_label, chart.y_label])
        .map_err(csv_error)?;
    for (label, count) in &chart.bars {
        wrt.write_record([label.clone(), count.to_string()])
            .map_err(csv_error)?;
    }
    wrt.flush()?;
    Ok(())
}
