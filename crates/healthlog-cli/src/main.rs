use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "healthlog", version, about = "Daily health metrics logger")]
struct Cli {
    /// Path to the health log CSV (overrides config and the default location)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record today's entry
    Add(commands::add::AddArgs),
    /// Recent-history summary with averages
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the progress chart
    Chart(commands::chart::ChartArgs),
    /// Interactive menu
    Menu,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Add(args) => commands::add::run(&cli.file, args),
        Commands::Summary { json } => commands::summary::run(&cli.file, json),
        Commands::Chart(args) => commands::chart::run(&cli.file, args),
        Commands::Menu => commands::menu::run(&cli.file),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
