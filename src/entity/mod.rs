//! Statically declared record shapes for the observation dataset.

pub mod measurement;
pub mod station;
