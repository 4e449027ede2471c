use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use garenne_sim::simulation::{
    Configuration, DemographyConfig, ExecutionConfig, InitialPopulation, Simulation,
};

use crate::args::{OutputFormat, RunArgs};
use crate::printing;

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let config = Configuration {
        execution: ExecutionConfig::new(args.years, args.seed),
        demography: DemographyConfig::default(),
        initial: InitialPopulation::single(args.age, args.females, args.males),
    };

    println!("🐇 Garenne Population Simulator");
    printing::print_parameters(&config);

    let mut sim = Simulation::new(config).context("Failed to initialize simulation")?;

    let steps = sim.total_years().saturating_sub(1) as u64;
    let progress = if args.progress && steps > 0 {
        let bar = ProgressBar::new(steps);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    while !sim.is_complete() {
        sim.step()
            .with_context(|| format!("Simulation failed at year {}", sim.year()))?;
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = progress {
        bar.finish_with_message("Simulation complete");
    }

    let snapshots = sim.into_snapshots();
    match args.format {
        OutputFormat::Table => printing::print_snapshot_tables(&snapshots),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&snapshots)
                .context("Failed to serialize snapshots")?;
            println!("{json}");
        }
    }

    Ok(())
}
