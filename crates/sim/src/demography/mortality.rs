//! Stochastic mortality model.
//!
//! Two independent sub-rules, both sampled per individual so a cohort's
//! death count can never exceed the cohort itself:
//!
//! - Infant mortality applies to the year's newborns. An infant dies when
//!   its uniform deviate is >= 0.12, so 12% of newborns survive their
//!   first year.
//! - Adult mortality applies to the live cohorts at ages 1..=15. Base
//!   survival is 60%; from age 10 a decline of 0.10 per year of age is
//!   subtracted, reaching a threshold of 0.0 at age 15, at which point
//!   every deviate in [0, 1) kills.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::DemographyError;
use crate::simulation::cohort::{BirthCounts, DeathCounts, PopulationSnapshot, Sex, AGE_CLASSES};

/// Survival threshold for infants: a newborn dies when its deviate is at
/// least this value.
pub const INFANT_SURVIVAL: f64 = 0.12;

/// Base survival threshold for adults (ages 1..=9).
pub const ADULT_SURVIVAL: f64 = 0.60;

/// Yearly reduction of the adult survival threshold past the onset age.
pub const DECLINE_STEP: f64 = 0.10;

/// Age at which the survival decline starts.
pub const DECLINE_ONSET_AGE: usize = 10;

/// Mortality model: infant and age-dependent adult death rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortalityModel {
    /// An infant dies when its deviate is >= this threshold.
    infant_survival: f64,
    /// An adult dies when its deviate is >= `adult_survival - decline(age)`.
    adult_survival: f64,
    /// Threshold reduction per year of age past the onset.
    decline_step: f64,
    /// First age affected by the decline.
    decline_onset: usize,
}

impl MortalityModel {
    /// Create a mortality model from explicit thresholds.
    ///
    /// # Errors
    /// Returns an error if either survival threshold is outside [0, 1] or
    /// the decline step is negative.
    pub fn new(
        infant_survival: f64,
        adult_survival: f64,
        decline_step: f64,
        decline_onset: usize,
    ) -> Result<Self, DemographyError> {
        if !(0.0..=1.0).contains(&infant_survival) {
            return Err(DemographyError::InvalidProbability(
                "infant_survival",
                infant_survival,
            ));
        }
        if !(0.0..=1.0).contains(&adult_survival) {
            return Err(DemographyError::InvalidProbability(
                "adult_survival",
                adult_survival,
            ));
        }
        if decline_step < 0.0 {
            return Err(DemographyError::NegativeDeclineStep(decline_step));
        }
        Ok(Self {
            infant_survival,
            adult_survival,
            decline_step,
            decline_onset,
        })
    }

    /// The reference model: 12% infant survival, 60% adult survival,
    /// declining by 10 percentage points per year from age 10.
    pub fn reference() -> Self {
        Self {
            infant_survival: INFANT_SURVIVAL,
            adult_survival: ADULT_SURVIVAL,
            decline_step: DECLINE_STEP,
            decline_onset: DECLINE_ONSET_AGE,
        }
    }

    /// Infant survival threshold.
    pub fn infant_survival(&self) -> f64 {
        self.infant_survival
    }

    /// Base adult survival threshold.
    pub fn adult_survival(&self) -> f64 {
        self.adult_survival
    }

    /// Age-dependent reduction of the adult survival threshold. Zero below
    /// the onset age, then one step per year of age including the onset.
    pub fn decline(&self, age: usize) -> f64 {
        if age >= self.decline_onset {
            self.decline_step * (age - self.decline_onset + 1) as f64
        } else {
            0.0
        }
    }

    /// Effective survival threshold for an adult of `age`. May be negative,
    /// in which case every deviate kills.
    pub fn survival_threshold(&self, age: usize) -> f64 {
        self.adult_survival - self.decline(age)
    }

    /// Count deaths among `count` individuals sharing one survival
    /// threshold, drawing one deviate per individual.
    fn deaths_in_cohort<R: Rng + ?Sized>(count: u64, threshold: f64, rng: &mut R) -> u64 {
        let mut dead = 0;
        for _ in 0..count {
            if rng.random::<f64>() >= threshold {
                dead += 1;
            }
        }
        dead
    }

    /// Compute the year's deaths for every age/sex cohort.
    ///
    /// Age 0 is drawn from `births`; ages 1..=15 from the snapshot's live
    /// cohorts. Each cohort is an independent parallel task with its own
    /// seeded RNG, so the result is deterministic for a fixed seed
    /// regardless of thread count, and every death count is bounded by the
    /// cohort it was drawn from.
    pub fn compute_deaths<R: Rng + ?Sized>(
        &self,
        snapshot: &PopulationSnapshot,
        births: &BirthCounts,
        rng: &mut R,
    ) -> DeathCounts {
        let mut cohorts = Vec::with_capacity(2 * AGE_CLASSES);
        for sex in Sex::BOTH {
            cohorts.push((sex, 0, births.of_sex(sex), self.infant_survival));
            for age in 1..AGE_CLASSES {
                cohorts.push((sex, age, snapshot.alive(sex, age), self.survival_threshold(age)));
            }
        }

        let seeds: Vec<u64> = cohorts.iter().map(|_| rng.random()).collect();

        let sampled: Vec<(Sex, usize, u64)> = cohorts
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(&(sex, age, count, threshold), &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                (sex, age, Self::deaths_in_cohort(count, threshold, &mut local_rng))
            })
            .collect();

        let mut deaths = DeathCounts::default();
        for (sex, age, dead) in sampled {
            deaths.set(sex, age, dead);
        }
        deaths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIALS: u64 = 100_000;

    fn rng() -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(42)
    }

    #[test]
    fn test_new_rejects_invalid_thresholds() {
        assert_eq!(
            MortalityModel::new(1.2, 0.6, 0.1, 10).unwrap_err(),
            DemographyError::InvalidProbability("infant_survival", 1.2)
        );
        assert_eq!(
            MortalityModel::new(0.12, -0.1, 0.1, 10).unwrap_err(),
            DemographyError::InvalidProbability("adult_survival", -0.1)
        );
        assert_eq!(
            MortalityModel::new(0.12, 0.6, -0.1, 10).unwrap_err(),
            DemographyError::NegativeDeclineStep(-0.1)
        );
    }

    #[test]
    fn test_decline_schedule() {
        let model = MortalityModel::reference();
        for age in 1..DECLINE_ONSET_AGE {
            assert_eq!(model.decline(age), 0.0);
        }
        assert!((model.decline(10) - 0.1).abs() < 1e-12);
        assert!((model.decline(11) - 0.2).abs() < 1e-12);
        assert!((model.decline(15) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_survival_threshold_caps_at_zero_by_age_15() {
        let model = MortalityModel::reference();
        assert!((model.survival_threshold(9) - 0.6).abs() < 1e-12);
        assert!((model.survival_threshold(10) - 0.5).abs() < 1e-12);
        assert!(model.survival_threshold(15).abs() < 1e-12);
    }

    #[test]
    fn test_infant_mortality_rate() {
        let model = MortalityModel::reference();
        let mut rng = rng();
        let dead =
            MortalityModel::deaths_in_cohort(TRIALS, model.infant_survival(), &mut rng);

        // 88% of infants die.
        let rate = dead as f64 / TRIALS as f64;
        assert!((rate - 0.88).abs() < 0.01, "infant death rate {rate}");
    }

    #[test]
    fn test_adult_mortality_rate() {
        let model = MortalityModel::reference();
        let mut rng = rng();
        let dead =
            MortalityModel::deaths_in_cohort(TRIALS, model.survival_threshold(5), &mut rng);

        // 40% of prime-age adults die.
        let rate = dead as f64 / TRIALS as f64;
        assert!((rate - 0.40).abs() < 0.01, "adult death rate {rate}");
    }

    #[test]
    fn test_oldest_age_always_dies() {
        let model = MortalityModel::reference();
        let mut rng = rng();
        // Threshold 0.0: every deviate in [0, 1) kills.
        let dead = MortalityModel::deaths_in_cohort(1_000, model.survival_threshold(15), &mut rng);
        assert_eq!(dead, 1_000);
    }

    #[test]
    fn test_compute_deaths_bounded_by_cohorts() {
        let model = MortalityModel::reference();
        let mut rng = rng();
        let mut snapshot = PopulationSnapshot::with_cohort(4, 100, 80).unwrap();
        snapshot.add_cohort(12, 30, 30).unwrap();
        let births = BirthCounts {
            females: 200,
            males: 180,
        };

        let deaths = model.compute_deaths(&snapshot, &births, &mut rng);
        for sex in Sex::BOTH {
            assert!(deaths.by_age(sex)[0] <= births.of_sex(sex));
            for age in 1..AGE_CLASSES {
                assert!(deaths.by_age(sex)[age] <= snapshot.alive(sex, age));
            }
        }
    }

    #[test]
    fn test_compute_deaths_empty_population() {
        let model = MortalityModel::reference();
        let mut rng = rng();
        let deaths = model.compute_deaths(
            &PopulationSnapshot::empty(),
            &BirthCounts::default(),
            &mut rng,
        );
        assert_eq!(deaths.total(), 0);
    }

    #[test]
    fn test_compute_deaths_deterministic() {
        let model = MortalityModel::reference();
        let snapshot = PopulationSnapshot::with_cohort(4, 500, 500).unwrap();
        let births = BirthCounts {
            females: 1_000,
            males: 1_000,
        };

        let a = model.compute_deaths(&snapshot, &births, &mut rng());
        let b = model.compute_deaths(&snapshot, &births, &mut rng());
        assert_eq!(a, b);
    }
}
