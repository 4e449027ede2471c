//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use garenne_sim::prelude::*;
//!
//! let initial = PopulationSnapshot::with_cohort(4, 10, 10).unwrap();
//! let snapshots = run_simulation(initial, 5, Some(42)).unwrap();
//! assert_eq!(snapshots.len(), 5);
//! ```

pub use crate::demography::{BirthModel, MortalityModel};
pub use crate::errors;
pub use crate::simulation::{
    run_simulation, BirthCounts, Configuration, DeathCounts, PopulationSnapshot, Sex, Simulation,
    SimulationBuilder, AGE_CLASSES, MATURITY_AGE, MAX_AGE,
};
