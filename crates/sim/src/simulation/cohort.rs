//! Age-structured cohort tables.
//!
//! One [`PopulationSnapshot`] holds everything the model knows about a
//! simulated year: live and dead counts per sex, indexed by age 0..=15.
//! Age 15 is the last tracked class; its survivors age out of the table
//! rather than accumulating in an overflow bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ConfigError;

/// Number of tracked age classes (ages 0 through 15).
pub const AGE_CLASSES: usize = 16;

/// Oldest tracked age.
pub const MAX_AGE: usize = AGE_CLASSES - 1;

/// Minimum age at which a female reproduces.
pub const MATURITY_AGE: usize = 1;

/// Sex of an individual or cohort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Both sexes, in the fixed order used for sampling and display.
    pub const BOTH: [Self; 2] = [Self::Female, Self::Male];
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
        }
    }
}

/// Aggregate newborn counts produced across all mature females in one year.
///
/// Individual litters are not retained after aggregation; all newborns enter
/// their snapshot at age 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthCounts {
    pub females: u64,
    pub males: u64,
}

impl BirthCounts {
    /// Newborns of one sex.
    pub fn of_sex(&self, sex: Sex) -> u64 {
        match sex {
            Sex::Female => self.females,
            Sex::Male => self.males,
        }
    }

    /// Total newborns across both sexes.
    pub fn total(&self) -> u64 {
        self.females + self.males
    }
}

/// Deaths attributable to each age/sex cohort in one year.
///
/// Age 0 tabulates infant deaths among that year's newborns; ages 1..=15
/// tabulate adult deaths among the live cohorts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathCounts {
    female_by_age: [u64; AGE_CLASSES],
    male_by_age: [u64; AGE_CLASSES],
}

impl DeathCounts {
    /// Per-age death counts for one sex.
    pub fn by_age(&self, sex: Sex) -> &[u64; AGE_CLASSES] {
        match sex {
            Sex::Female => &self.female_by_age,
            Sex::Male => &self.male_by_age,
        }
    }

    /// Total deaths across both sexes and all ages.
    pub fn total(&self) -> u64 {
        self.female_by_age.iter().sum::<u64>() + self.male_by_age.iter().sum::<u64>()
    }

    pub(crate) fn set(&mut self, sex: Sex, age: usize, dead: u64) {
        match sex {
            Sex::Female => self.female_by_age[age] = dead,
            Sex::Male => self.male_by_age[age] = dead,
        }
    }
}

/// A cohort whose deaths outnumber its live count.
///
/// Produced by [`PopulationSnapshot::age_survivors`] when the checked
/// subtraction underflows; the engine attaches the year and surfaces it as
/// a fatal [`SimulationError`](crate::errors::SimulationError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CohortUnderflow {
    pub sex: Sex,
    pub age: usize,
    pub alive: u64,
    pub dead: u64,
}

/// The complete per-age, per-sex live and death counts for one simulated year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    female_alive: [u64; AGE_CLASSES],
    female_dead: [u64; AGE_CLASSES],
    male_alive: [u64; AGE_CLASSES],
    male_dead: [u64; AGE_CLASSES],
}

impl PopulationSnapshot {
    /// Create a snapshot with no individuals.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a snapshot holding a single live cohort.
    pub fn with_cohort(age: usize, females: u64, males: u64) -> Result<Self, ConfigError> {
        let mut snapshot = Self::empty();
        snapshot.add_cohort(age, females, males)?;
        Ok(snapshot)
    }

    /// Add live individuals to the cohort at `age`, accumulating with any
    /// counts already present.
    pub fn add_cohort(&mut self, age: usize, females: u64, males: u64) -> Result<(), ConfigError> {
        if age >= AGE_CLASSES {
            return Err(ConfigError::AgeOutOfRange { age });
        }
        self.female_alive[age] += females;
        self.male_alive[age] += males;
        Ok(())
    }

    /// Live count at one age.
    ///
    /// # Panics
    /// Panics if `age >= AGE_CLASSES`.
    pub fn alive(&self, sex: Sex, age: usize) -> u64 {
        self.alive_row(sex)[age]
    }

    /// Death count at one age.
    ///
    /// # Panics
    /// Panics if `age >= AGE_CLASSES`.
    pub fn dead(&self, sex: Sex, age: usize) -> u64 {
        self.dead_row(sex)[age]
    }

    /// Full per-age live row for one sex.
    pub fn alive_row(&self, sex: Sex) -> &[u64; AGE_CLASSES] {
        match sex {
            Sex::Female => &self.female_alive,
            Sex::Male => &self.male_alive,
        }
    }

    /// Full per-age death row for one sex.
    pub fn dead_row(&self, sex: Sex) -> &[u64; AGE_CLASSES] {
        match sex {
            Sex::Female => &self.female_dead,
            Sex::Male => &self.male_dead,
        }
    }

    /// Count of females old enough to reproduce (age >= 1).
    pub fn mature_females(&self) -> u64 {
        self.female_alive[MATURITY_AGE..].iter().sum()
    }

    /// Total live individuals across both sexes and all ages.
    pub fn total_alive(&self) -> u64 {
        self.female_alive.iter().sum::<u64>() + self.male_alive.iter().sum::<u64>()
    }

    /// True when no live individuals remain.
    pub fn is_extinct(&self) -> bool {
        self.total_alive() == 0
    }

    /// Record the year's newborns in the age-0 live slots.
    pub(crate) fn record_births(&mut self, births: &BirthCounts) {
        self.female_alive[0] = births.females;
        self.male_alive[0] = births.males;
    }

    /// Record the year's deaths in the dead rows.
    pub(crate) fn record_deaths(&mut self, deaths: &DeathCounts) {
        self.female_dead = *deaths.by_age(Sex::Female);
        self.male_dead = *deaths.by_age(Sex::Male);
    }

    /// Derive the next year's live cohorts by aging this year's survivors
    /// forward by one year: `next.alive[a] = alive[a-1] - dead[a-1]` for
    /// ages 1..=15. The next year's age-0 slot stays empty until its own
    /// births are recorded; survivors of age 15 leave the tracked range.
    pub(crate) fn age_survivors(&self) -> Result<Self, CohortUnderflow> {
        let mut next = Self::empty();
        for sex in Sex::BOTH {
            let alive = self.alive_row(sex);
            let dead = self.dead_row(sex);
            for age in 1..AGE_CLASSES {
                let survivors =
                    alive[age - 1]
                        .checked_sub(dead[age - 1])
                        .ok_or(CohortUnderflow {
                            sex,
                            age: age - 1,
                            alive: alive[age - 1],
                            dead: dead[age - 1],
                        })?;
                match sex {
                    Sex::Female => next.female_alive[age] = survivors,
                    Sex::Male => next.male_alive[age] = survivors,
                }
            }
        }
        Ok(next)
    }
}
