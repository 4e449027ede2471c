//! Simulation engine, cohort tables, and configuration.
//!
//! The most commonly used simulation types are re-exported here for
//! convenience:
//!
//! - [`Simulation`]: the engine that steps the population year by year.
//! - [`PopulationSnapshot`]: the per-year age/sex cohort tables.
//! - [`SimulationBuilder`]: fluent builder with validation.
//! - [`Configuration`]: serializable run setup.

pub mod builder;
pub mod cohort;
pub mod configs;
pub mod engine;

pub use builder::SimulationBuilder;
pub use cohort::{BirthCounts, DeathCounts, PopulationSnapshot, Sex, AGE_CLASSES, MATURITY_AGE, MAX_AGE};
pub use configs::{
    Configuration, DemographyConfig, ExecutionConfig, InitialCohort, InitialPopulation,
};
pub use engine::{run_simulation, Simulation};
