//! The interactive menu loop.

use std::io::{self, Write};
use std::path::PathBuf;

use super::{add, chart, summary};

/// Present the four choices until the user exits. Each action re-opens the
/// store; nothing is cached between choices, so a concurrent append from
/// another instance is visible on the next action.
pub fn run(file: &Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    loop {
        println!();
        println!("=== Health Tracker Menu ===");
        println!("1. Add new entry");
        println!("2. View weekly summary");
        println!("3. Show progress chart");
        println!("4. Exit");
        print!("Enter your choice (1-4): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            "1" => add::run(file, add::AddArgs::default())?,
            "2" => summary::run(file, false)?,
            "3" => chart::run(file, chart::ChartArgs::default())?,
            "4" => {
                println!("Exiting health tracker. Stay healthy!");
                return Ok(());
            }
            other => println!("Invalid choice '{other}', please enter 1-4."),
        }
    }
}
