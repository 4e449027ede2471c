//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! the reference demographic models as defaults.

use crate::demography::{BirthModel, MortalityModel};
use crate::errors::ConfigError;
use crate::simulation::configs::{InitialCohort, InitialPopulation};
use crate::simulation::engine::Simulation;

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// # Examples
///
/// ```
/// use garenne_sim::simulation::SimulationBuilder;
///
/// let mut sim = SimulationBuilder::new()
///     .years(28)
///     .initial_cohort(4, 10, 10)
///     .seed(42)
///     .build()
///     .unwrap();
/// sim.run().unwrap();
/// assert_eq!(sim.snapshots().len(), 28);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    years: Option<usize>,
    seed: Option<u64>,
    cohorts: Vec<InitialCohort>,
    birth: Option<BirthModel>,
    mortality: Option<MortalityModel>,
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of annual snapshots to produce (required).
    pub fn years(mut self, years: usize) -> Self {
        self.years = Some(years);
        self
    }

    /// Set the RNG seed. Defaults to entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a live cohort to the initial population. May be called multiple
    /// times; cohorts sharing an age accumulate. An initial population with
    /// no cohorts is valid and stays extinct.
    pub fn initial_cohort(mut self, age: usize, females: u64, males: u64) -> Self {
        self.cohorts.push(InitialCohort {
            age,
            females,
            males,
        });
        self
    }

    /// Replace the reference birth model.
    pub fn birth_model(mut self, model: BirthModel) -> Self {
        self.birth = Some(model);
        self
    }

    /// Replace the reference mortality model.
    pub fn mortality_model(mut self, model: MortalityModel) -> Self {
        self.mortality = Some(model);
        self
    }

    /// Build the simulation, validating the configuration.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        let years = self.years.ok_or(ConfigError::MissingRequired("years"))?;
        let initial = InitialPopulation {
            cohorts: self.cohorts,
        }
        .to_snapshot()?;

        Simulation::from_parts(
            initial,
            self.birth.unwrap_or_else(BirthModel::reference),
            self.mortality.unwrap_or_else(MortalityModel::reference),
            years,
            self.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_years() {
        let result = SimulationBuilder::new().initial_cohort(4, 10, 10).build();
        assert_eq!(result.unwrap_err(), ConfigError::MissingRequired("years"));
    }

    #[test]
    fn test_builder_defaults_to_reference_models() {
        let sim = SimulationBuilder::new()
            .years(3)
            .initial_cohort(4, 10, 10)
            .build()
            .unwrap();
        assert_eq!(*sim.birth_model(), BirthModel::reference());
        assert_eq!(*sim.mortality_model(), MortalityModel::reference());
    }

    #[test]
    fn test_builder_custom_models() {
        let birth = BirthModel::new(vec![1.0], 1, 2, 2, 0.5).unwrap();
        let mortality = MortalityModel::new(1.0, 1.0, 0.0, 10).unwrap();

        let sim = SimulationBuilder::new()
            .years(3)
            .initial_cohort(2, 5, 5)
            .birth_model(birth.clone())
            .mortality_model(mortality.clone())
            .build()
            .unwrap();

        assert_eq!(*sim.birth_model(), birth);
        assert_eq!(*sim.mortality_model(), mortality);
    }

    #[test]
    fn test_builder_rejects_out_of_range_age() {
        let result = SimulationBuilder::new()
            .years(3)
            .initial_cohort(16, 1, 1)
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::AgeOutOfRange { age: 16 });
    }

    #[test]
    fn test_builder_empty_population_is_valid() {
        let mut sim = SimulationBuilder::new().years(4).seed(1).build().unwrap();
        sim.run().unwrap();
        assert!(sim.snapshots().iter().all(|s| s.is_extinct()));
    }
}
