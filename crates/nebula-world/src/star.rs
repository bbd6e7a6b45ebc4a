//! Star generation.

use nebula_types::{Star, StarType};
use rand::Rng;

use crate::anomaly::generate_anomalies;
use crate::belt::generate_asteroid_belts;
use crate::constants::{LUMINOSITY_EXPONENT, PLANETS_PER_STAR, RADIUS_EXPONENT, STAR_MASS};
use crate::naming;
use crate::planet::generate_planet;
use crate::sampling::{pick, round_to, uniform};

/// Luminosity in solar units for a mass in solar masses.
pub fn luminosity_from_mass(mass_solar: f64) -> f64 {
    mass_solar.powf(LUMINOSITY_EXPONENT)
}

/// Radius in solar units for a mass in solar masses.
pub fn radius_from_mass(mass_solar: f64) -> f64 {
    mass_solar.powf(RADIUS_EXPONENT)
}

/// Generate a star with its anomalies, belts and 2-5 planets.
///
/// Luminosity and radius are derived from the unrounded mass; all three
/// are then rounded to two decimals.
pub fn generate_star(rng: &mut impl Rng, now_ms: i64) -> Star {
    let star_type = pick(rng, &StarType::ALL).unwrap_or(StarType::G);
    let mass_solar = uniform(rng, STAR_MASS);
    let name = naming::star_name(rng);
    let id = naming::star_id(rng);
    let anomalies = generate_anomalies(rng);
    let asteroid_belts = generate_asteroid_belts(rng);

    let planet_count = rng.random_range(PLANETS_PER_STAR);
    let planets = (0..planet_count)
        .map(|index| generate_planet(rng, &name, index, now_ms))
        .collect();

    Star {
        id,
        name,
        star_type,
        mass_solar: round_to(mass_solar, 2),
        radius_solar: round_to(radius_from_mass(mass_solar), 2),
        luminosity_solar: round_to(luminosity_from_mass(mass_solar), 2),
        planets,
        anomalies,
        asteroid_belts,
    }
}
