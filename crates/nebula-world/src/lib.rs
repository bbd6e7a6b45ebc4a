//! Procedural galaxy generation and resource accrual for the Nebula dashboard.
//!
//! Everything here is pure: generators take an explicit random source and a
//! timestamp, and accrual takes an explicit `now`. Shared state, clocks and
//! HTTP live in the crates above this one.
//!
//! # Modules
//!
//! - [`galaxy`] -- [`GalaxyConfig`] validation and whole-galaxy assembly.
//! - [`star`] -- Spectral class, mass, and the derived radius and luminosity.
//! - [`planet`] -- Orbits, environments, and production sources.
//! - [`anomaly`] -- Stellar anomalies and their resource impact.
//! - [`belt`] -- Asteroid belts with richness-scaled yield.
//! - [`resource`] -- Time-based accrual with exact fractional carry.
//! - [`naming`] -- Base36 identifiers and display names.
//! - [`sampling`] -- Small helpers over the random source.
//! - [`constants`] -- Generation and production tuning.
//! - [`error`] -- Error types for this crate.

pub mod anomaly;
pub mod belt;
pub mod constants;
pub mod error;
pub mod galaxy;
pub mod naming;
pub mod planet;
pub mod resource;
pub mod sampling;
pub mod star;

pub use error::WorldError;
pub use galaxy::{GalaxyConfig, generate_galaxy, generate_solar_system};
pub use resource::{AccrualSummary, advance_galaxy, advance_planet};
