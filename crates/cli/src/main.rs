mod args;
mod commands;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::RunArgs;
use commands::run;

/// Garenne: a stochastic rabbit population simulator
///
/// Simulates the year-by-year growth of an age- and sex-structured rabbit
/// population under stochastic birth and death rules.
#[derive(Parser, Debug)]
#[command(name = "garenne")]
#[command(author, version, about = "Simulates the growth of a rabbit population", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation and print the yearly cohort tables.
    ///
    /// Executes the simulation year by year from the configured initial
    /// population.
    Run(Box<RunArgs>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
    }

    Ok(())
}
