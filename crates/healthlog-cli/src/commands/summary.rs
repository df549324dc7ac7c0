//! Recent-history summary with averages.

use std::path::PathBuf;

use healthlog_core::{Config, SummaryAnalyzer};

use super::common::open_store;

pub fn run(file: &Option<PathBuf>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(file)?;
    let records = store.load_all()?;

    let config = Config::load_or_default();
    let analyzer = SummaryAnalyzer::with_window(config.report.window_size);

    let Some(summary) = analyzer.summarize(&records) else {
        println!("No data recorded yet.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Last {} entries:", summary.window.len());
    println!(
        "{:<12} {:>10} {:>8} {:>7} {:>10}",
        "date", "exercise", "water", "sleep", "calories"
    );
    for record in &summary.window {
        let date = record.date.to_string();
        println!(
            "{date:<12} {:>10.1} {:>8.2} {:>7.2} {:>10.1}",
            record.exercise_minutes, record.water_liters, record.sleep_hours, record.calories
        );
    }

    println!();
    println!("Averages over the last {} entries:", summary.window.len());
    for (field, value) in &summary.averages {
        println!("  {field}: {value:.2}");
    }
    Ok(())
}
