//! Recent-history summaries over the record set.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::{Record, NUMERIC_FIELDS};

/// Default number of most-recent records a summary covers.
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// A computed summary: the window itself plus the per-field averages over it.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub window: Vec<Record>,
    pub averages: BTreeMap<String, f64>,
}

/// Derives a recent-activity summary from a loaded record set.
#[derive(Debug, Clone)]
pub struct SummaryAnalyzer {
    /// Number of most-recent records the summary covers.
    pub window_size: usize,
}

impl Default for SummaryAnalyzer {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl SummaryAnalyzer {
    /// An analyzer with the default window of 7.
    pub fn new() -> Self {
        Self::default()
    }

    /// An analyzer with a custom window size.
    pub fn with_window(window_size: usize) -> Self {
        Self { window_size }
    }

    /// The last `min(window_size, len)` records, in original order.
    /// Empty input yields an empty slice, not an error.
    pub fn recent_window<'a>(&self, records: &'a [Record]) -> &'a [Record] {
        &records[records.len().saturating_sub(self.window_size)..]
    }

    /// Arithmetic mean of each numeric field over `records`.
    ///
    /// Empty input yields an empty map rather than dividing by zero;
    /// callers must check emptiness before presenting averages. Values are
    /// averaged as stored, with no range checks.
    pub fn average_fields(&self, records: &[Record]) -> BTreeMap<String, f64> {
        let mut averages = BTreeMap::new();
        if records.is_empty() {
            return averages;
        }

        let mut sums = [0.0f64; NUMERIC_FIELDS.len()];
        for record in records {
            for (i, (_, value)) in record.numeric_values().iter().enumerate() {
                sums[i] += value;
            }
        }

        let n = records.len() as f64;
        for (i, field) in NUMERIC_FIELDS.iter().enumerate() {
            averages.insert(field.to_string(), sums[i] / n);
        }
        averages
    }

    /// The single entry point the display layer calls: the recent window
    /// and its averages. `None` is the no-data state; nothing is computed
    /// for an empty record set.
    pub fn summarize(&self, records: &[Record]) -> Option<Summary> {
        if records.is_empty() {
            return None;
        }
        let window = self.recent_window(records).to_vec();
        let averages = self.average_fields(&window);
        Some(Summary { window, averages })
    }
}
