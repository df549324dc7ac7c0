//! Record today's entry.
//!
//! Values can be passed as flags; anything missing is gathered through an
//! interactive prompt that re-prompts on non-numeric input. The date is
//! always the current system date, never user-supplied.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use healthlog_core::record::{self, Record};

use super::common::open_store;

#[derive(Args, Default)]
pub struct AddArgs {
    /// Exercise minutes
    #[arg(long)]
    pub exercise: Option<f64>,
    /// Water intake in liters
    #[arg(long)]
    pub water: Option<f64>,
    /// Sleep hours
    #[arg(long)]
    pub sleep: Option<f64>,
    /// Calories consumed
    #[arg(long)]
    pub calories: Option<f64>,
}

pub fn run(file: &Option<PathBuf>, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(file)?;
    let date = Local::now().date_naive();
    println!("Date: {date}");

    let exercise = resolve(args.exercise, "Exercise (minutes)", "exercise_minutes")?;
    let water = resolve(args.water, "Water (liters)", "water_liters")?;
    let sleep = resolve(args.sleep, "Sleep (hours)", "sleep_hours")?;
    let calories = resolve(args.calories, "Calories consumed", "calories")?;

    store.append(Record::new(date, exercise, water, sleep, calories))?;
    println!("Entry added to {}", store.path().display());
    Ok(())
}

fn resolve(
    flag: Option<f64>,
    label: &str,
    field: &'static str,
) -> Result<f64, Box<dyn std::error::Error>> {
    match flag {
        Some(value) => Ok(value),
        None => prompt_value(label, field),
    }
}

/// Prompt until the input parses as a number.
fn prompt_value(label: &str, field: &'static str) -> Result<f64, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    loop {
        print!("{label}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Err("input closed before a value was entered".into());
        }
        match record::parse_field(field, line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("{e}, try again"),
        }
    }
}
