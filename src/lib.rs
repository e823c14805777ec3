//! paineldata - CSV dataset loading and chart aggregation for the student
//! statistics dashboard
//!
//! The pipeline is a straight line: fetch text, auto-detect the delimiter,
//! tokenize into rows, zip the header row against each data row, aggregate
//! per chart, and hand a serializable chart configuration to the front-end.
//!
//! **Leniency policy:**
//! - Malformed quoting never fails the parse; the tokenizer always
//!   terminates with a best-effort row sequence
//! - Unparsable quantities count as 0, missing categories become
//!   "Não informado"
//! - Any per-chart failure (fetch, empty file, unusable labels) degrades to
//!   a placeholder message for that chart only
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use paineldata::{render_all, DirSource};
//!
//! # async fn run() {
//! let source = Arc::new(DirSource::new("web"));
//! for view in render_all(source).await {
//!     println!("{}: {:?}", view.title, view.outcome);
//! }
//! # }
//! ```

pub mod aggregate;
pub mod charts;
pub mod csv;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod fetch;
pub mod format;
pub mod palette;

pub use charts::{by_key, registry, ChartSpec};
pub use dashboard::{render_all, render_chart, render_page, ChartOutcome, ChartView, PageView};
pub use dataset::{Dataset, Record};
pub use error::{PainelError, Result};
pub use fetch::{load_dataset, DatasetSource, DirSource, HttpSource};
