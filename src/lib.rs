//! walkstat - report energy burned during indoor walks.
//!
//! Reads an Apple Health `export.xml` in a single streaming pass and
//! prints one `start,end,kcal` line per indoor walking workout. The
//! library splits into two modules mirroring the two processing stages:
//!
//! - [`export`] - streaming extraction of `<Workout>` subtrees with
//!   bounded memory
//! - [`report`] - the fixed filter chain and line formatting

pub mod export;
pub mod report;

pub use export::{ExportError, MetadataEntry, Workout, WorkoutStatistic, WorkoutStream};
pub use report::ReportLine;
