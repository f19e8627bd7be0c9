//! Climate API - read-only JSON API over station precipitation and temperature observations
//!
//! This library exposes the core modules for testing and reuse.

pub mod common;
pub mod config;
pub mod dates;
pub mod entity;
pub mod error;
pub mod routes;
