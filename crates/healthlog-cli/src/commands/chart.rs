//! Render the progress chart.

use std::path::PathBuf;

use clap::Args;
use healthlog_core::store::data_dir;
use healthlog_core::{render_progress_chart, ChartOptions, Config};

use super::common::open_store;

#[derive(Args, Default)]
pub struct ChartArgs {
    /// Output image path (PNG)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,
    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

pub fn run(file: &Option<PathBuf>, args: ChartArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(file)?;
    let records = store.load_all()?;
    if records.is_empty() {
        println!("No data to chart yet.");
        return Ok(());
    }

    let config = Config::load_or_default();
    let out = match args.out.or(config.chart.output) {
        Some(path) => path,
        None => data_dir()?.join("progress.png"),
    };

    let options = ChartOptions {
        width: args.width.unwrap_or(config.chart.width),
        height: args.height.unwrap_or(config.chart.height),
        ..ChartOptions::default()
    };

    render_progress_chart(&records, &out, &options)?;
    println!("Chart written to {}", out.display());
    Ok(())
}
