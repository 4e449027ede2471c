//! Simulation parameters and configuration.
//!
//! The master [`Configuration`] struct can be serialized to fully reproduce
//! a simulation setup: run length and seed, the demographic models, and the
//! hand-set initial population.

use serde::{Deserialize, Serialize};

use crate::demography::{BirthModel, MortalityModel};
use crate::errors::ConfigError;
use crate::simulation::cohort::PopulationSnapshot;

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub execution: ExecutionConfig,
    pub demography: DemographyConfig,
    pub initial: InitialPopulation,
}

impl Configuration {
    /// The reference scenario: 28 simulated years starting from 10 females
    /// and 10 males at age 4, with the reference demographic models and no
    /// fixed seed.
    pub fn reference() -> Self {
        Self {
            execution: ExecutionConfig::new(28, None),
            demography: DemographyConfig::default(),
            initial: InitialPopulation::single(4, 10, 10),
        }
    }
}

/// High-level run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Total number of annual snapshots to produce (at least 1; the run
    /// performs `total_years - 1` transitions).
    pub total_years: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl ExecutionConfig {
    /// Create new run parameters.
    pub fn new(total_years: usize, seed: Option<u64>) -> Self {
        Self { total_years, seed }
    }
}

/// Grouped demographic models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographyConfig {
    pub birth: BirthModel,
    pub mortality: MortalityModel,
}

impl Default for DemographyConfig {
    fn default() -> Self {
        Self {
            birth: BirthModel::reference(),
            mortality: MortalityModel::reference(),
        }
    }
}

/// One hand-set live cohort of the initial population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialCohort {
    pub age: usize,
    pub females: u64,
    pub males: u64,
}

/// The hand-set initial population for year 0.
///
/// An empty cohort list is valid and yields the all-zero fixed point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialPopulation {
    pub cohorts: Vec<InitialCohort>,
}

impl InitialPopulation {
    /// A single-cohort initial population.
    pub fn single(age: usize, females: u64, males: u64) -> Self {
        Self {
            cohorts: vec![InitialCohort {
                age,
                females,
                males,
            }],
        }
    }

    /// Materialize the year-0 snapshot, accumulating cohorts that share an
    /// age.
    pub fn to_snapshot(&self) -> Result<PopulationSnapshot, ConfigError> {
        let mut snapshot = PopulationSnapshot::empty();
        for cohort in &self.cohorts {
            snapshot.add_cohort(cohort.age, cohort.females, cohort.males)?;
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::cohort::Sex;

    #[test]
    fn test_reference_configuration() {
        let config = Configuration::reference();
        assert_eq!(config.execution.total_years, 28);
        assert_eq!(config.execution.seed, None);

        let snapshot = config.initial.to_snapshot().unwrap();
        assert_eq!(snapshot.alive(Sex::Female, 4), 10);
        assert_eq!(snapshot.alive(Sex::Male, 4), 10);
        assert_eq!(snapshot.total_alive(), 20);
    }

    #[test]
    fn test_initial_population_accumulates_same_age() {
        let initial = InitialPopulation {
            cohorts: vec![
                InitialCohort {
                    age: 3,
                    females: 2,
                    males: 0,
                },
                InitialCohort {
                    age: 3,
                    females: 1,
                    males: 4,
                },
            ],
        };
        let snapshot = initial.to_snapshot().unwrap();
        assert_eq!(snapshot.alive(Sex::Female, 3), 3);
        assert_eq!(snapshot.alive(Sex::Male, 3), 4);
    }

    #[test]
    fn test_initial_population_rejects_bad_age() {
        let initial = InitialPopulation::single(20, 1, 1);
        assert_eq!(
            initial.to_snapshot().unwrap_err(),
            ConfigError::AgeOutOfRange { age: 20 }
        );
    }

    #[test]
    fn test_empty_initial_population() {
        let snapshot = InitialPopulation::default().to_snapshot().unwrap();
        assert!(snapshot.is_extinct());
    }

    #[test]
    fn test_configuration_serde_round_trip() {
        let config = Configuration::reference();
        let json = serde_json::to_string(&config).unwrap();
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
