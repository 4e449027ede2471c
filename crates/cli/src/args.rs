use clap::{Args, ValueEnum};

/// Output rendering for the snapshot sequence.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Per-year cohort tables
    Table,
    /// JSON array of snapshots
    Json,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of simulated years (annual snapshots)
    #[arg(short = 'y', long, default_value = "28")]
    pub years: usize,

    /// Initial number of females
    #[arg(long, default_value = "10")]
    pub females: u64,

    /// Initial number of males
    #[arg(long, default_value = "10")]
    pub males: u64,

    /// Age of the initial cohort (0..=15)
    #[arg(long, default_value = "4")]
    pub age: usize,

    /// Random seed
    ///
    /// Runs with the same seed and inputs produce identical tables.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Show progress bar
    #[arg(long, default_value = "true")]
    pub progress: bool,
}
