//! Stateless condition simulators. Every function takes its randomness from the caller.

pub mod weather;
pub mod air_quality;
pub mod activities;
