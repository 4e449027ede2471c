//! Stochastic demographic models.
//!
//! The birth and mortality models hold the hard-coded probability tables of
//! the reference scenario as named constants, but accept substitutes through
//! their constructors so tests can pin down degenerate distributions.

pub mod birth;
pub mod mortality;

pub use birth::BirthModel;
pub use mortality::MortalityModel;
