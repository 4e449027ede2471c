//! Simulation engine for the population evolution.
//!
//! This module provides the year-stepping loop that orchestrates births,
//! deaths, and aging across simulated years. Years are strictly sequential
//! (each snapshot is derived from the previous one); the stochastic work
//! inside one year is parallelized by the demographic models.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::demography::{BirthModel, MortalityModel};
use crate::errors::{ConfigError, SimulationError};
use crate::simulation::cohort::PopulationSnapshot;
use crate::simulation::configs::Configuration;

/// Main simulation engine.
///
/// Owns the snapshot sequence for one run. Snapshot 0 is the caller-supplied
/// initial population; each transition finalizes the latest snapshot's birth
/// and death records and appends the next year's live cohorts.
#[derive(Debug)]
pub struct Simulation {
    /// Annual snapshots, one per simulated year so far
    snapshots: Vec<PopulationSnapshot>,
    /// Birth model
    birth: BirthModel,
    /// Mortality model
    mortality: MortalityModel,
    /// Number of snapshots a full run produces
    total_years: usize,
    /// Master random number generator (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a new simulation from configuration.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        let initial = config.initial.to_snapshot()?;
        Self::from_parts(
            initial,
            config.demography.birth,
            config.demography.mortality,
            config.execution.total_years,
            config.execution.seed,
        )
    }

    /// Create a simulation from an already-built initial snapshot.
    pub fn from_parts(
        initial: PopulationSnapshot,
        birth: BirthModel,
        mortality: MortalityModel,
        total_years: usize,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if total_years == 0 {
            return Err(ConfigError::ZeroYears);
        }

        let rng = if let Some(seed) = seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let mut snapshots = Vec::with_capacity(total_years);
        snapshots.push(initial);

        Ok(Self {
            snapshots,
            birth,
            mortality,
            total_years,
            rng,
        })
    }

    /// Index of the latest simulated year.
    pub fn year(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Number of snapshots a full run produces.
    pub fn total_years(&self) -> usize {
        self.total_years
    }

    /// True once the configured number of snapshots exists.
    pub fn is_complete(&self) -> bool {
        self.snapshots.len() >= self.total_years
    }

    /// Snapshots produced so far.
    pub fn snapshots(&self) -> &[PopulationSnapshot] {
        &self.snapshots
    }

    /// Consume the engine, returning the snapshot sequence.
    pub fn into_snapshots(self) -> Vec<PopulationSnapshot> {
        self.snapshots
    }

    /// Get reference to the birth model.
    pub fn birth_model(&self) -> &BirthModel {
        &self.birth
    }

    /// Get reference to the mortality model.
    pub fn mortality_model(&self) -> &MortalityModel {
        &self.mortality
    }

    /// Advance the simulation by one year.
    ///
    /// Finalizes the latest snapshot by sampling its births and deaths,
    /// then appends the next year's snapshot with survivors aged forward by
    /// one year. The finalized fields are never revisited.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let year = self.year();

        // Births and deaths are sampled against the snapshot before its
        // age-0 slot is written: newborns never reproduce in their birth
        // year, and infant deaths are drawn from the birth counts.
        let births = self.birth.compute_births(&self.snapshots[year], &mut self.rng);
        let deaths = self
            .mortality
            .compute_deaths(&self.snapshots[year], &births, &mut self.rng);

        let current = &mut self.snapshots[year];
        current.record_births(&births);
        current.record_deaths(&deaths);

        let next = current
            .age_survivors()
            .map_err(|u| SimulationError::InvariantViolation {
                year,
                sex: u.sex,
                age: u.age,
                alive: u.alive,
                dead: u.dead,
            })?;
        self.snapshots.push(next);

        Ok(())
    }

    /// Run the remaining transitions of the configured span.
    ///
    /// The terminal snapshot's own birth and death fields stay zero: no
    /// transition consumes it.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        while !self.is_complete() {
            self.step()?;
        }
        Ok(())
    }
}

/// Run a complete simulation with the reference demographic models.
///
/// Returns `total_years` snapshots, the first equal to `initial`. All
/// errors surface synchronously; there is no partial result once an
/// invariant breaks mid-year.
pub fn run_simulation(
    initial: PopulationSnapshot,
    total_years: usize,
    seed: Option<u64>,
) -> Result<Vec<PopulationSnapshot>, SimulationError> {
    let mut sim = Simulation::from_parts(
        initial,
        BirthModel::reference(),
        MortalityModel::reference(),
        total_years,
        seed,
    )?;
    sim.run()?;
    Ok(sim.into_snapshots())
}
