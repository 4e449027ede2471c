//! Stochastic birth model.
//!
//! Every mature female (age >= 1) independently produces a yearly number of
//! litters drawn from a weighted discrete distribution, each litter holds an
//! equiprobable number of kits, and each kit's sex is a fair coin. Only the
//! aggregate newborn counts per sex survive aggregation.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::DemographyError;
use crate::simulation::cohort::{BirthCounts, PopulationSnapshot, Sex};

/// Cumulative weights of the yearly litter-count distribution, starting at
/// [`LITTER_COUNT_MIN`] litters: P(4)=10%, P(5)=20%, P(6)=40%, P(7)=20%,
/// P(8)=10%.
pub const LITTER_COUNT_WEIGHTS: [f64; 5] = [0.10, 0.30, 0.70, 0.90, 1.00];

/// Smallest number of litters a mature female produces in one year.
pub const LITTER_COUNT_MIN: u64 = 4;

/// Inclusive lower bound of the equiprobable kits-per-litter range.
pub const KITS_PER_LITTER_MIN: u64 = 3;

/// Inclusive upper bound of the equiprobable kits-per-litter range.
pub const KITS_PER_LITTER_MAX: u64 = 6;

/// Probability that a newborn kit is female.
pub const FEMALE_PROBABILITY: f64 = 0.5;

/// Mothers sampled per parallel task. Tasks get independent seeded RNGs so
/// the aggregate is identical for any thread count.
const MOTHERS_PER_TASK: u64 = 4096;

/// Birth model: litters per mature female, kits per litter, sex assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthModel {
    /// Cumulative litter-count weights; entry `i` is
    /// P(count <= litter_min + i).
    litter_weights: Vec<f64>,
    /// Litter count corresponding to the first weight entry.
    litter_min: u64,
    /// Inclusive kits-per-litter bounds.
    kits_min: u64,
    kits_max: u64,
    /// Probability of a female kit.
    female_prob: f64,
}

impl BirthModel {
    /// Create a birth model from explicit distribution parameters.
    ///
    /// # Errors
    /// Returns an error if the weight table is empty, not nondecreasing,
    /// contains values outside [0, 1], does not end at 1.0, if the
    /// kits-per-litter range is empty, or if `female_prob` is not a
    /// probability.
    pub fn new(
        litter_weights: Vec<f64>,
        litter_min: u64,
        kits_min: u64,
        kits_max: u64,
        female_prob: f64,
    ) -> Result<Self, DemographyError> {
        if litter_weights.is_empty() {
            return Err(DemographyError::EmptyLitterWeights);
        }
        let mut previous = 0.0;
        for (index, &weight) in litter_weights.iter().enumerate() {
            if !(0.0..=1.0).contains(&weight) {
                return Err(DemographyError::InvalidProbability("litter weight", weight));
            }
            if weight < previous {
                return Err(DemographyError::NonMonotonicLitterWeights { index });
            }
            previous = weight;
        }
        let last = *litter_weights.last().unwrap_or(&0.0);
        if (last - 1.0).abs() > f64::EPSILON {
            return Err(DemographyError::IncompleteLitterWeights { last });
        }
        if kits_min > kits_max {
            return Err(DemographyError::EmptyLitterRange {
                min: kits_min,
                max: kits_max,
            });
        }
        if !(0.0..=1.0).contains(&female_prob) {
            return Err(DemographyError::InvalidProbability(
                "female_prob",
                female_prob,
            ));
        }
        Ok(Self {
            litter_weights,
            litter_min,
            kits_min,
            kits_max,
            female_prob,
        })
    }

    /// The reference model: 4-8 litters per year weighted toward 6,
    /// 3-6 kits per litter, 50/50 sex split.
    pub fn reference() -> Self {
        Self {
            litter_weights: LITTER_COUNT_WEIGHTS.to_vec(),
            litter_min: LITTER_COUNT_MIN,
            kits_min: KITS_PER_LITTER_MIN,
            kits_max: KITS_PER_LITTER_MAX,
            female_prob: FEMALE_PROBABILITY,
        }
    }

    /// Smallest possible litter count.
    pub fn litter_min(&self) -> u64 {
        self.litter_min
    }

    /// Largest possible litter count.
    pub fn litter_max(&self) -> u64 {
        self.litter_min + self.litter_weights.len() as u64 - 1
    }

    /// Inclusive kits-per-litter bounds.
    pub fn kits_range(&self) -> (u64, u64) {
        (self.kits_min, self.kits_max)
    }

    /// Probability of a female kit.
    pub fn female_prob(&self) -> f64 {
        self.female_prob
    }

    /// Smallest possible yearly offspring per mature female.
    pub fn min_offspring_per_mother(&self) -> u64 {
        self.litter_min * self.kits_min
    }

    /// Largest possible yearly offspring per mature female.
    pub fn max_offspring_per_mother(&self) -> u64 {
        self.litter_max() * self.kits_max
    }

    /// Draw one yearly litter count from the weighted distribution.
    pub fn sample_litter_count<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let draw = rng.random::<f64>();
        for (i, &weight) in self.litter_weights.iter().enumerate() {
            if draw <= weight {
                return self.litter_min + i as u64;
            }
        }
        // Unreachable when the table ends at 1.0; the last class absorbs
        // any residual mass regardless.
        self.litter_max()
    }

    /// Draw one equiprobable kits-per-litter count.
    pub fn sample_litter_size<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.random_range(self.kits_min..=self.kits_max)
    }

    /// Draw the sex of one kit.
    pub fn sample_sex<R: Rng + ?Sized>(&self, rng: &mut R) -> Sex {
        if rng.random::<f64>() <= self.female_prob {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    /// Sample one mother's yearly offspring; returns (females, males).
    fn births_for_mother<R: Rng + ?Sized>(&self, rng: &mut R) -> (u64, u64) {
        let mut females = 0;
        let mut males = 0;
        let litters = self.sample_litter_count(rng);
        for _ in 0..litters {
            let kits = self.sample_litter_size(rng);
            for _ in 0..kits {
                match self.sample_sex(rng) {
                    Sex::Female => females += 1,
                    Sex::Male => males += 1,
                }
            }
        }
        (females, males)
    }

    /// Compute the aggregate newborn counts produced by a year's mature
    /// females.
    ///
    /// Mothers are sampled in parallel chunks, each with an independent RNG
    /// seeded from the master generator, so the result is deterministic for
    /// a fixed seed regardless of thread count.
    pub fn compute_births<R: Rng + ?Sized>(
        &self,
        snapshot: &PopulationSnapshot,
        rng: &mut R,
    ) -> BirthCounts {
        let mothers = snapshot.mature_females();
        if mothers == 0 {
            return BirthCounts::default();
        }

        let tasks = mothers.div_ceil(MOTHERS_PER_TASK);
        let seeds: Vec<u64> = (0..tasks).map(|_| rng.random()).collect();

        let (females, males) = seeds
            .par_iter()
            .enumerate()
            .map(|(task, &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let sampled = task as u64 * MOTHERS_PER_TASK;
                let in_task = MOTHERS_PER_TASK.min(mothers - sampled);

                let mut females = 0;
                let mut males = 0;
                for _ in 0..in_task {
                    let (f, m) = self.births_for_mother(&mut local_rng);
                    females += f;
                    males += m;
                }
                (females, males)
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

        BirthCounts { females, males }
    }
}
