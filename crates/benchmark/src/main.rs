//! Scenario replay CLI for the stowage engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stowage_benchmark::{RunConfig, Scenario, ScenarioRunner};

#[derive(Parser)]
#[command(name = "stowage-bench")]
#[command(about = "Scenario replay and stability reporting for the stowage engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in scenarios
    List,

    /// Replay a built-in scenario
    Run {
        /// Scenario name (see `list`)
        #[arg(short, long)]
        scenario: String,

        /// Print the grid after every step
        #[arg(long)]
        show_grid: bool,

        /// Output file for the report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay a scenario from a local JSON file
    RunFile {
        /// Path to the scenario JSON file
        file: PathBuf,

        /// Print the grid after every step
        #[arg(long)]
        show_grid: bool,

        /// Output file for the report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("Built-in scenarios:");
            for name in Scenario::builtin_names() {
                println!("  - {}", name);
            }
            println!("\nUse 'stowage-bench run -s <SCENARIO>' to replay one");
        }

        Commands::Run {
            scenario,
            show_grid,
            output,
        } => {
            let scenario = Scenario::builtin(&scenario).ok_or_else(|| {
                anyhow::anyhow!("unknown scenario '{scenario}' (see 'stowage-bench list')")
            })?;
            replay(&scenario, show_grid, output)?;
        }

        Commands::RunFile {
            file,
            show_grid,
            output,
        } => {
            let scenario = Scenario::from_file(&file)?;
            replay(&scenario, show_grid, output)?;
        }
    }

    Ok(())
}

fn replay(scenario: &Scenario, show_grid: bool, output: Option<PathBuf>) -> anyhow::Result<()> {
    let runner = ScenarioRunner::new(RunConfig { show_grid });
    let report = runner.run(scenario);

    println!("{}", report);

    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}
