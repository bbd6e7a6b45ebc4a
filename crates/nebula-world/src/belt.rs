//! Asteroid belt generation.

use nebula_types::{AsteroidBelt, BeltRichness, ResourceType};
use rand::Rng;

use crate::constants::{
    BELT_BASE_YIELD, BELT_CHANCE, BELT_YIELD_VARIANCE, BELTS_PER_STAR, richness_factor,
};
use crate::naming;
use crate::sampling::{chance, pick, uniform, whole_units};

/// Hourly yield of a belt before rounding.
pub fn belt_yield(richness: BeltRichness, variance: f64) -> f64 {
    BELT_BASE_YIELD * richness_factor(richness) * variance
}

/// Generate one belt with independent richness and primary resource.
pub fn generate_asteroid_belt(rng: &mut impl Rng) -> AsteroidBelt {
    let richness = pick(rng, &BeltRichness::ALL).unwrap_or(BeltRichness::Moderate);
    let primary_resource =
        pick(rng, &ResourceType::BELT_ELIGIBLE).unwrap_or(ResourceType::Metal);
    let variance = uniform(rng, BELT_YIELD_VARIANCE);

    AsteroidBelt {
        id: naming::belt_id(rng),
        name: naming::belt_name(rng),
        richness,
        primary_resource,
        yield_per_hour: whole_units(belt_yield(richness, variance)),
    }
}

/// Generate the belts of a star: with probability 0.7 one or two belts.
pub fn generate_asteroid_belts(rng: &mut impl Rng) -> Vec<AsteroidBelt> {
    if !chance(rng, BELT_CHANCE) {
        return Vec::new();
    }
    let count = rng.random_range(BELTS_PER_STAR);
    (0..count).map(|_| generate_asteroid_belt(rng)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn yield_formula() {
        assert!((belt_yield(BeltRichness::Sparse, 1.0) - 400.0).abs() < 1e-9);
        assert!((belt_yield(BeltRichness::Moderate, 1.0) - 800.0).abs() < 1e-9);
        assert!((belt_yield(BeltRichness::Rich, 1.25) - 1600.0).abs() < 1e-9);
    }

    #[test]
    fn belts_respect_bounds() {
        let mut rng = SmallRng::seed_from_u64(21);
        for _ in 0..1_000 {
            let belts = generate_asteroid_belts(&mut rng);
            assert!(belts.len() <= 2);
            for belt in belts {
                assert!(ResourceType::BELT_ELIGIBLE.contains(&belt.primary_resource));
                // sparse * 0.8 = 320 at the low end, rich * 1.3 = 1664 at the top.
                assert!((320..=1664).contains(&belt.yield_per_hour));
                assert!(belt.name.starts_with("Belt-"));
            }
        }
    }

    #[test]
    fn some_stars_have_no_belts() {
        let mut rng = SmallRng::seed_from_u64(22);
        let empty = (0..1_000)
            .filter(|_| generate_asteroid_belts(&mut rng).is_empty())
            .count();
        // Expect about 30% without belts.
        assert!((200..400).contains(&empty), "empty count was {empty}");
    }
}
