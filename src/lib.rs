//! Quickplot - a fire-and-forget gnuplot front-end.
//!
//! Quickplot collects labeled 2D point series and hands them to gnuplot: it
//! formats the series into gnuplot's blank-line-delimited data-block format,
//! writes a matching batch script, and launches gnuplot against the pair.
//! Both files are temporary and are cleaned up once gnuplot exits.
//!
//! # Example
//!
//! ```ignore
//! use quickplot::{GnuplotRenderer, SeriesCollection};
//!
//! let mut series = SeriesCollection::new();
//! series.add_points("run 1", [(1.0, 10.0), (2.0, 11.0)]);
//! series.add_point("run 2", (2.0, 10.0));
//!
//! // Blocks until the gnuplot window is dismissed.
//! GnuplotRenderer::new(&series).render()?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod data;
pub mod error;
pub mod gnuplot;
pub mod series;

pub use error::{QuickplotError, Result};
pub use gnuplot::{AxisRanges, GnuplotRenderer};
pub use series::{Point, SeriesCollection};
