//! Time-series chart rendering.
//!
//! Draws one line per numeric field against the date axis and writes the
//! result to a PNG file. Presentation only; the record set is taken as
//! loaded, unsorted and unvalidated.

use std::path::Path;

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;

use crate::error::ChartError;
use crate::record::Record;

/// Rendering options for the progress chart.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub caption: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            caption: "Health Tracker Progress".to_string(),
        }
    }
}

/// Render the progress chart for `records` to the PNG file at `out`.
///
/// # Errors
/// Returns [`ChartError::NoData`] when there are no records to plot, and
/// [`ChartError::Render`] when the plotting backend fails.
pub fn render_progress_chart(
    records: &[Record],
    out: &Path,
    options: &ChartOptions,
) -> Result<(), ChartError> {
    if records.is_empty() {
        return Err(ChartError::NoData);
    }

    let mut start = records[0].date;
    let mut end = records[0].date;
    for record in records {
        start = start.min(record.date);
        end = end.max(record.date);
    }
    if start == end {
        // A single distinct date makes a degenerate axis; widen it by a day.
        end += Duration::days(1);
    }

    let mut y_min = 0.0f64;
    let mut y_max = f64::MIN;
    for record in records {
        for (_, value) in record.numeric_values() {
            y_min = y_min.min(value);
            y_max = y_max.max(value);
        }
    }
    if y_max <= y_min {
        y_max = y_min + 1.0;
    }

    let series: [(&str, fn(&Record) -> f64, RGBColor); 4] = [
        ("exercise_minutes", |r: &Record| r.exercise_minutes, RED),
        ("water_liters", |r: &Record| r.water_liters, BLUE),
        ("sleep_hours", |r: &Record| r.sleep_hours, GREEN),
        ("calories", |r: &Record| r.calories, MAGENTA),
    ];

    let root = BitMapBackend::new(out, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(start..end, y_min..(y_max + (y_max - y_min) * 0.05))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Measurements")
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .draw()
        .map_err(render_err)?;

    for (name, value_of, color) in series {
        let points: Vec<(NaiveDate, f64)> =
            records.iter().map(|r| (r.date, value_of(r))).collect();
        chart
            .draw_series(LineSeries::new(points, &color))
            .map_err(render_err)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(render_err)?;
    root.present().map_err(render_err)?;
    Ok(())
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, exercise: f64) -> Record {
        Record::new(date.parse().unwrap(), exercise, 2.0, 7.5, 2100.0)
    }

    #[test]
    fn empty_input_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chart.png");
        let err = render_progress_chart(&[], &out, &ChartOptions::default()).unwrap_err();
        assert!(matches!(err, ChartError::NoData));
        assert!(!out.exists());
    }

    #[test]
    fn renders_a_png_for_a_multi_day_set() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chart.png");
        let records = vec![
            record("2024-01-01", 30.0),
            record("2024-01-02", 45.0),
            record("2024-01-03", 20.0),
        ];
        render_progress_chart(&records, &out, &ChartOptions::default()).unwrap();
        assert!(out.metadata().unwrap().len() > 0);
    }

    #[test]
    fn a_single_date_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("chart.png");
        let records = vec![record("2024-01-01", 30.0)];
        render_progress_chart(&records, &out, &ChartOptions::default()).unwrap();
        assert!(out.exists());
    }
}
