//! Planet generation: orbit, environment and production sources.
//!
//! Every planet gets one production source for each planet-eligible
//! resource. Rates grow by 5% per orbital slot outward.

use std::f64::consts::TAU;

use nebula_types::{OrbitalPosition, Planet, PlanetEnvironment, ResourceSource, ResourceType};
use rand::Rng;

use crate::constants::{
    ATMOSPHERE_DENSITY, DAYS_PER_YEAR, FIRST_ORBIT_AU, GRAVITY, HABITABILITY_INDEX,
    MAX_ORBITAL_RADIUS_AU, ORBIT_BASE_AU, ORBIT_JITTER_AU, ORBIT_PRODUCTION_BIAS,
    ORBIT_SPACING_AU, PRODUCTION_VARIANCE, TEMPERATURE_KELVIN, base_rate,
};
use crate::naming;
use crate::sampling::{round_to, uniform, whole_units};

/// Sample the orbital radius for the planet at `index` around its star.
///
/// The innermost planet sits in `[0.3, 0.8)` AU. Outer planets use
/// `0.4 + index * [0.3, 0.8)` plus a jitter of `[-0.1, 0.2)`, capped at
/// 5 AU. Radii are not forced to increase with the index.
pub fn orbital_radius(rng: &mut impl Rng, index: u32) -> f64 {
    if index == 0 {
        return uniform(rng, FIRST_ORBIT_AU);
    }
    let spacing = uniform(rng, ORBIT_SPACING_AU);
    let base = f64::from(index).mul_add(spacing, ORBIT_BASE_AU);
    (base + uniform(rng, ORBIT_JITTER_AU)).min(MAX_ORBITAL_RADIUS_AU)
}

/// Orbital period in days from Kepler's third law: `radius^1.5 * 365.25`.
pub fn orbital_period_days(radius_au: f64) -> f64 {
    radius_au.powf(1.5) * DAYS_PER_YEAR
}

/// Sample an orbital position. Display values are rounded and the angle is
/// kept strictly below 2π.
pub fn generate_position(rng: &mut impl Rng, index: u32) -> OrbitalPosition {
    let orbital_radius_au = round_to(orbital_radius(rng, index), 2);
    let angle = round_to(uniform(rng, 0.0..TAU), 4);

    OrbitalPosition {
        orbital_radius_au,
        orbital_period_days: round_to(orbital_period_days(orbital_radius_au), 1),
        angle_radians: if angle < TAU { angle } else { 0.0 },
    }
}

/// Sample independent surface conditions.
pub fn generate_environment(rng: &mut impl Rng) -> PlanetEnvironment {
    PlanetEnvironment {
        gravity: round_to(uniform(rng, GRAVITY), 2),
        atmosphere_density: round_to(uniform(rng, ATMOSPHERE_DENSITY), 2),
        temperature_kelvin: round_to(uniform(rng, TEMPERATURE_KELVIN), 2),
        habitability_index: round_to(uniform(rng, HABITABILITY_INDEX), 2),
    }
}

/// Orbit bias multiplier for the planet at `index`.
pub fn orbit_bias(index: u32) -> f64 {
    f64::from(index).mul_add(ORBIT_PRODUCTION_BIAS, 1.0)
}

/// One production source per planet-eligible resource.
pub fn generate_resource_sources(rng: &mut impl Rng, index: u32) -> Vec<ResourceSource> {
    let bias = orbit_bias(index);
    ResourceType::PLANET_ELIGIBLE
        .into_iter()
        .map(|resource| {
            let variance = uniform(rng, PRODUCTION_VARIANCE);
            ResourceSource {
                resource,
                production_rate_per_hour: whole_units(base_rate(resource) * variance * bias),
            }
        })
        .collect()
}

/// Generate the planet at `index` around the star called `star_name`.
///
/// Inventories and remainders start at zero for every resource and the
/// planet is stamped with `now_ms`. No planet is controlled here.
pub fn generate_planet(rng: &mut impl Rng, star_name: &str, index: u32, now_ms: i64) -> Planet {
    let position = generate_position(rng, index);
    let resource_sources = generate_resource_sources(rng, index);
    let environment = generate_environment(rng);

    Planet {
        id: naming::planet_id(rng),
        name: naming::planet_name(star_name, index),
        position,
        environment,
        resource_sources,
        resource_inventory: Planet::empty_inventory(),
        resource_remainder: Planet::empty_remainder(),
        last_updated_ms: now_ms,
        is_controlled: false,
    }
}
