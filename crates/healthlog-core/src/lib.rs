//! # Healthlog Core Library
//!
//! Core business logic for healthlog, a personal health-metrics logger.
//! All operations are available through the standalone CLI binary; this
//! crate holds everything the CLI is a thin shell over.
//!
//! ## Architecture
//!
//! - **Record Store**: a flat CSV file holding the append-only history of
//!   daily entries. Every append reloads the full set and rewrites the file
//!   through a temp-file-and-rename, so the log is always well-formed.
//! - **Reporting**: windowed summaries over the most recent entries with
//!   per-field averages.
//! - **Chart**: time-series line chart of all four metrics, rendered to PNG.
//! - **Config**: TOML-based user preferences (store location, window size,
//!   chart dimensions).
//!
//! ## Key Components
//!
//! - [`LogStore`]: durable, schema-stable persistence of the record history
//! - [`Record`]: one day's measurements plus its date
//! - [`SummaryAnalyzer`]: recent-window summary and averages
//! - [`Config`]: application configuration management

pub mod chart;
pub mod error;
pub mod record;
pub mod report;
pub mod store;

pub use chart::{render_progress_chart, ChartOptions};
pub use error::{ChartError, ConfigError, CoreError, RecordError, StoreError};
pub use record::Record;
pub use report::{Summary, SummaryAnalyzer};
pub use store::{Config, LogStore};
