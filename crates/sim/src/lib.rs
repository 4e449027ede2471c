//! # Simulation Crate
//!
//! The `sim` crate provides the core logic for the rabbit population
//! simulation: the age- and sex-structured cohort tables, the stochastic
//! birth and mortality models, and the year-stepping engine that drives
//! them.
//!
//! A simulated year is one `PopulationSnapshot`: live and dead counts per
//! sex for ages 0 through 15. The engine derives each year from the
//! previous one by sampling births and deaths per individual, then aging
//! survivors forward by one year.

pub mod demography;
pub mod errors;
pub mod prelude;
pub mod simulation;

pub use simulation::cohort::{BirthCounts, DeathCounts, PopulationSnapshot, Sex};
pub use simulation::engine::{run_simulation, Simulation};
