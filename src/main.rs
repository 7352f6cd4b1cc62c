//! Quickplot - plot labeled 2D point series with gnuplot.

use anyhow::Result;
use clap::Parser;
use quickplot::data::SeriesReader;
use quickplot::{AxisRanges, GnuplotRenderer};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "quickplot")]
#[command(about = "Plot labeled 2D point series with gnuplot", long_about = None)]
struct Args {
    /// Path to the series file to plot (one "LABEL X Y" record per line)
    file: PathBuf,

    /// Print the generated data block instead of plotting
    #[arg(long)]
    data_only: bool,

    /// Print the generated batch script for DATAFILE instead of plotting
    #[arg(long, value_name = "DATAFILE")]
    script_only: Option<String>,

    /// Horizontal axis range
    #[arg(long, value_name = "MIN:MAX", value_parser = parse_range, allow_hyphen_values = true)]
    xrange: Option<(f64, f64)>,

    /// Vertical axis range
    #[arg(long, value_name = "MIN:MAX", value_parser = parse_range, allow_hyphen_values = true)]
    yrange: Option<(f64, f64)>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_range(value: &str) -> Result<(f64, f64), String> {
    let (min, max) = value
        .split_once(':')
        .ok_or_else(|| format!("expected MIN:MAX, got '{}'", value))?;
    let min = min
        .trim()
        .parse()
        .map_err(|_| format!("invalid range bound '{}'", min))?;
    let max = max
        .trim()
        .parse()
        .map_err(|_| format!("invalid range bound '{}'", max))?;
    Ok((min, max))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Quickplot");
    }

    if !args.file.exists() {
        eprintln!("Error: Path not found: {}", args.file.display());
        std::process::exit(1);
    }

    let series = SeriesReader::read_file(&args.file)?;

    let mut ranges = AxisRanges::default();
    if let Some(x) = args.xrange {
        ranges.x = x;
    }
    if let Some(y) = args.yrange {
        ranges.y = y;
    }
    let renderer = GnuplotRenderer::new(&series).ranges(ranges);

    if args.data_only {
        print!("{}", renderer.render_data());
    } else if let Some(ref data_file) = args.script_only {
        println!("{}", renderer.render_script(data_file));
    } else {
        renderer.render()?;
    }

    if args.log.is_some() {
        tracing::info!("Quickplot exited");
    }

    Ok(())
}
