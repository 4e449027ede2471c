use std::error;
use std::fmt;

use crate::simulation::cohort::Sex;

/// Errors that can occur when constructing a demographic model.
#[derive(Debug, Clone, PartialEq)]
pub enum DemographyError {
    /// Invalid probability value
    InvalidProbability(&'static str, f64),
    /// The litter-count weight table is empty
    EmptyLitterWeights,
    /// The litter-count weight table is not nondecreasing
    NonMonotonicLitterWeights { index: usize },
    /// The litter-count weight table does not end at 1.0
    IncompleteLitterWeights { last: f64 },
    /// The kits-per-litter range is empty
    EmptyLitterRange { min: u64, max: u64 },
    /// The mortality decline step is negative
    NegativeDeclineStep(f64),
}

impl fmt::Display for DemographyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProbability(name, val) => {
                write!(
                    f,
                    "Invalid probability for {name}: {val} (must be between 0.0 and 1.0)"
                )
            }
            Self::EmptyLitterWeights => write!(f, "Litter-count weight table is empty"),
            Self::NonMonotonicLitterWeights { index } => {
                write!(
                    f,
                    "Litter-count weights must be cumulative (nondecreasing); entry {index} decreases"
                )
            }
            Self::IncompleteLitterWeights { last } => {
                write!(
                    f,
                    "Litter-count weights must end at 1.0 (last entry is {last})"
                )
            }
            Self::EmptyLitterRange { min, max } => {
                write!(f, "Empty kits-per-litter range [{min}, {max}]")
            }
            Self::NegativeDeclineStep(step) => {
                write!(f, "Mortality decline step must be nonnegative (got {step})")
            }
        }
    }
}

impl error::Error for DemographyError {}

/// Errors that can occur when building a simulation from configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// The configured number of simulated years is zero
    ZeroYears,
    /// An initial cohort names an age outside the tracked range
    AgeOutOfRange { age: usize },
    /// A demographic model was misconfigured
    Demography(DemographyError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(param) => {
                write!(f, "Missing required parameter: {param}")
            }
            Self::ZeroYears => write!(f, "Total simulated years must be at least 1"),
            Self::AgeOutOfRange { age } => {
                write!(
                    f,
                    "Initial cohort age {age} is outside the tracked range 0..=15"
                )
            }
            Self::Demography(e) => write!(f, "Invalid demographic model: {e}"),
        }
    }
}

impl error::Error for ConfigError {}

impl From<DemographyError> for ConfigError {
    fn from(e: DemographyError) -> Self {
        Self::Demography(e)
    }
}

/// Errors surfaced by a running simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Rejected configuration (surfaced before any year is simulated)
    Config(ConfigError),
    /// A derived live count would go negative: a death count exceeded the
    /// cohort it was drawn from. Per-individual sampling makes this
    /// unreachable; hitting it means a demographic model is miscalibrated.
    InvariantViolation {
        year: usize,
        sex: Sex,
        age: usize,
        alive: u64,
        dead: u64,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid configuration: {e}"),
            Self::InvariantViolation {
                year,
                sex,
                age,
                alive,
                dead,
            } => {
                write!(
                    f,
                    "Invariant violation in year {year}: {dead} deaths recorded for {alive} live {sex}s at age {age}"
                )
            }
        }
    }
}

impl error::Error for SimulationError {}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
