//! Gnuplot output generation and invocation.
//!
//! A [`SeriesCollection`] becomes two pieces of text: a data block holding
//! one blank-line-delimited section per series, and a batch script that
//! plots every section by `index` and pauses for interactive viewing.
//! [`GnuplotRenderer::render`] writes both to temporary files and runs
//! gnuplot against the script.

use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;
use crate::series::SeriesCollection;

/// External plotting program invoked by [`GnuplotRenderer::render`].
const GNUPLOT: &str = "gnuplot";

/// Axis ranges for the script header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRanges {
    /// Horizontal range as (min, max).
    pub x: (f64, f64),
    /// Vertical range as (min, max).
    pub y: (f64, f64),
}

impl Default for AxisRanges {
    fn default() -> Self {
        Self {
            x: (-2.0, 2.0),
            y: (-2.0, 2.0),
        }
    }
}

/// Renders a [`SeriesCollection`] through gnuplot.
#[derive(Debug)]
pub struct GnuplotRenderer<'a> {
    series: &'a SeriesCollection,
    ranges: AxisRanges,
}

impl<'a> GnuplotRenderer<'a> {
    /// Create a renderer over a collection, with the default axis ranges.
    pub fn new(series: &'a SeriesCollection) -> Self {
        Self {
            series,
            ranges: AxisRanges::default(),
        }
    }

    /// Override the axis ranges used in the script header.
    pub fn ranges(mut self, ranges: AxisRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Format the data block.
    ///
    /// One section per series in collection order: a blank line, a
    /// `# <label>` comment, then one tab-separated line per point with both
    /// coordinates printed to six fractional digits. The block ends with a
    /// single trailing newline after the final section.
    pub fn render_data(&self) -> String {
        let mut out = String::new();

        for (label, points) in self.series.iter() {
            out.push_str(&format!("\n# {}\n", label));
            for (x, y) in points {
                out.push_str(&format!("{:.6}\t{:.6}\n", x, y));
            }
        }
        out.push('\n');

        out
    }

    /// Format the batch script plotting every section of `data_file`.
    ///
    /// Each series gets one plot clause addressing its section by zero-based
    /// index; clauses after the first are continuation lines. The script
    /// ends with `pause -1` so the plot window stays open.
    pub fn render_script(&self, data_file: &str) -> String {
        let (x_min, x_max) = self.ranges.x;
        let (y_min, y_max) = self.ranges.y;
        let mut script = format!(
            "\nset xrange [{}:{}]\nset yrange [{}:{}]\n",
            x_min, x_max, y_min, y_max
        );

        let clauses: Vec<String> = self
            .series
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let head = if i == 0 { "plot" } else { "    " };
                format!(
                    "{} \"{}\" index {}:{} using 1:2 title \"{}\"",
                    head, data_file, i, i, label
                )
            })
            .collect();
        script.push_str(&clauses.join(", \\\n"));
        script.push('\n');

        script.push_str("\npause -1");
        script
    }

    /// Write the data block and script to temporary files and run gnuplot.
    ///
    /// Blocks until gnuplot exits; both files are removed when this returns.
    /// The exit status is not inspected. Failing to launch the program at
    /// all surfaces as an IO error.
    pub fn render(&self) -> Result<()> {
        let data_file = write_temp(&self.render_data())?;
        let script = self.render_script(&data_file.path().display().to_string());
        let script_file = write_temp(&script)?;

        debug!("invoking gnuplot on {}", script_file.path().display());
        let status = Command::new(GNUPLOT).arg(script_file.path()).status()?;
        debug!("gnuplot exited with {}", status);

        Ok(())
    }
}

fn write_temp(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
