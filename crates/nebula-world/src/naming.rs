//! Random identifiers and display names.
//!
//! Identifiers are `"{prefix}-{8 base36 chars}"`. Display names embed a
//! shorter upper-cased fragment. Collisions are possible and tolerated.

use nebula_types::{AnomalyId, BeltId, GalaxyId, PlanetId, StarId, SystemId};
use rand::Rng;

use crate::constants::{BELT_NAME_LEN, GALAXY_NAME_LEN, ID_SUFFIX_LEN, STAR_NAME_LEN};
use crate::sampling::pick;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A random lowercase base36 fragment of `len` characters.
pub fn base36_fragment(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(pick(rng, BASE36).unwrap_or(b'0')))
        .collect()
}

fn suffix(rng: &mut impl Rng) -> String {
    base36_fragment(rng, ID_SUFFIX_LEN)
}

/// New random galaxy identifier.
pub fn galaxy_id(rng: &mut impl Rng) -> GalaxyId {
    GalaxyId::with_suffix(&suffix(rng))
}

/// New random solar system identifier.
pub fn system_id(rng: &mut impl Rng) -> SystemId {
    SystemId::with_suffix(&suffix(rng))
}

/// New random star identifier.
pub fn star_id(rng: &mut impl Rng) -> StarId {
    StarId::with_suffix(&suffix(rng))
}

/// New random planet identifier.
pub fn planet_id(rng: &mut impl Rng) -> PlanetId {
    PlanetId::with_suffix(&suffix(rng))
}

/// New random anomaly identifier.
pub fn anomaly_id(rng: &mut impl Rng) -> AnomalyId {
    AnomalyId::with_suffix(&suffix(rng))
}

/// New random asteroid belt identifier.
pub fn belt_id(rng: &mut impl Rng) -> BeltId {
    BeltId::with_suffix(&suffix(rng))
}

/// Galaxy display name, e.g. `Galaxy-4QZ7A`.
pub fn galaxy_name(rng: &mut impl Rng) -> String {
    format!(
        "Galaxy-{}",
        base36_fragment(rng, GALAXY_NAME_LEN).to_uppercase()
    )
}

/// Star display name, e.g. `Star-K2P9`.
pub fn star_name(rng: &mut impl Rng) -> String {
    format!("Star-{}", base36_fragment(rng, STAR_NAME_LEN).to_uppercase())
}

/// Asteroid belt display name, e.g. `Belt-7QX`.
pub fn belt_name(rng: &mut impl Rng) -> String {
    format!("Belt-{}", base36_fragment(rng, BELT_NAME_LEN).to_uppercase())
}

/// Solar system display name derived from its star.
pub fn system_name(star_name: &str) -> String {
    format!("{star_name} System")
}

/// Planet display name: the star name and a 1-based orbit number.
pub fn planet_name(star_name: &str, index: u32) -> String {
    format!("{star_name}-{}", index.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn ids_have_prefix_and_eight_char_suffix() {
        let mut rng = SmallRng::seed_from_u64(42);
        let id = planet_id(&mut rng);
        let tail = id.suffix().unwrap_or_default();
        assert!(id.as_str().starts_with("planet-"));
        assert_eq!(tail.len(), ID_SUFFIX_LEN);
        assert!(tail.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn display_names_use_uppercase_fragments() {
        let mut rng = SmallRng::seed_from_u64(5);
        let galaxy = galaxy_name(&mut rng);
        let star = star_name(&mut rng);
        let belt = belt_name(&mut rng);

        assert_eq!(galaxy.len(), "Galaxy-".len() + GALAXY_NAME_LEN);
        assert_eq!(star.len(), "Star-".len() + STAR_NAME_LEN);
        assert_eq!(belt.len(), "Belt-".len() + BELT_NAME_LEN);
        assert!(!star.chars().skip(5).any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn derived_names() {
        assert_eq!(system_name("Star-AB12"), "Star-AB12 System");
        assert_eq!(planet_name("Star-AB12", 0), "Star-AB12-1");
        assert_eq!(planet_name("Star-AB12", 4), "Star-AB12-5");
    }
}
