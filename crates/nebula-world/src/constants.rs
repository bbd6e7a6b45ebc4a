//! Tuning constants for galaxy generation and resource accrual.
//!
//! Ranges are half-open and sampled uniformly.

use std::ops::{Range, RangeInclusive};

use nebula_types::{BeltRichness, ResourceType};

// ---------------------------------------------------------------------------
// Galaxy
// ---------------------------------------------------------------------------

/// Solar systems generated when no count is configured.
pub const DEFAULT_SOLAR_SYSTEM_COUNT: u32 = 4;

/// Largest solar system count a caller may request.
pub const MAX_SOLAR_SYSTEM_COUNT: u32 = 256;

/// Length of the random base36 part of every identifier.
pub const ID_SUFFIX_LEN: usize = 8;

/// Length of the random fragment in a galaxy name.
pub const GALAXY_NAME_LEN: usize = 5;

/// Length of the random fragment in a star name.
pub const STAR_NAME_LEN: usize = 4;

/// Length of the random fragment in an asteroid belt name.
pub const BELT_NAME_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Stars
// ---------------------------------------------------------------------------

/// Stellar mass in solar masses.
pub const STAR_MASS: Range<f64> = 0.5..2.5;

/// `luminosity = mass ^ LUMINOSITY_EXPONENT`.
pub const LUMINOSITY_EXPONENT: f64 = 3.5;

/// `radius = mass ^ RADIUS_EXPONENT`.
pub const RADIUS_EXPONENT: f64 = 0.8;

/// Planets per star (2 to 5).
pub const PLANETS_PER_STAR: Range<u32> = 2..6;

/// Probability that a star hosts an anomaly.
pub const ANOMALY_CHANCE: f64 = 0.6;

/// Probability that a star has any asteroid belts.
pub const BELT_CHANCE: f64 = 0.7;

/// Belts per star once the [`BELT_CHANCE`] roll succeeds (1 or 2).
pub const BELTS_PER_STAR: Range<u32> = 1..3;

/// Belt yield before richness and variance.
pub const BELT_BASE_YIELD: f64 = 800.0;

/// Random multiplier applied to every belt yield.
pub const BELT_YIELD_VARIANCE: Range<f64> = 0.8..1.3;

/// Yield multiplier for a belt richness tier.
pub const fn richness_factor(richness: BeltRichness) -> f64 {
    match richness {
        BeltRichness::Sparse => 0.5,
        BeltRichness::Moderate => 1.0,
        BeltRichness::Rich => 1.6,
    }
}

// ---------------------------------------------------------------------------
// Orbits
// ---------------------------------------------------------------------------

/// Orbital radius of the innermost planet, in AU.
pub const FIRST_ORBIT_AU: Range<f64> = 0.3..0.8;

/// Constant term of the outer orbit formula, in AU.
pub const ORBIT_BASE_AU: f64 = 0.4;

/// Per-index spacing factor of the outer orbit formula.
pub const ORBIT_SPACING_AU: Range<f64> = 0.3..0.8;

/// Jitter added to outer orbits, in AU.
pub const ORBIT_JITTER_AU: Range<f64> = -0.1..0.2;

/// Outer orbits are capped at this radius, in AU.
pub const MAX_ORBITAL_RADIUS_AU: f64 = 5.0;

/// Days in one Earth year, scaling Kepler's third law.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Habitable zone in AU.
///
/// Not consumed by any generation rule. Habitability is sampled
/// independently of orbital radius.
pub const HABITABLE_ZONE_AU: RangeInclusive<f64> = 0.75..=1.5;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Surface gravity in m/s².
pub const GRAVITY: Range<f64> = 6.0..22.0;

/// Atmosphere density relative to Earth.
pub const ATMOSPHERE_DENSITY: Range<f64> = 0.2..2.4;

/// Surface temperature in Kelvin.
pub const TEMPERATURE_KELVIN: Range<f64> = 90.0..900.0;

/// Habitability index.
pub const HABITABILITY_INDEX: Range<f64> = 0.1..0.95;

// ---------------------------------------------------------------------------
// Production
// ---------------------------------------------------------------------------

/// Random multiplier applied to every planetary production rate.
pub const PRODUCTION_VARIANCE: Range<f64> = 0.6..1.6;

/// Extra production per orbital index (5% per slot outward).
pub const ORBIT_PRODUCTION_BIAS: f64 = 0.05;

/// Hourly base production rate for a resource.
///
/// Energy has a base rate but no planet ever receives an energy source.
pub const fn base_rate(resource: ResourceType) -> f64 {
    match resource {
        ResourceType::Metal | ResourceType::Energy => 3600.0,
        ResourceType::Minerals => 4000.0,
        ResourceType::Fuel => 1000.0,
        ResourceType::Research => 100.0,
    }
}
