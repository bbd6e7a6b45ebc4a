//! Time-based resource accrual for planetary inventories.
//!
//! Each production source contributes `rate * elapsed_hours` units. The
//! fractional part of the running total is carried in the planet's
//! remainder map so that no production is ever lost to rounding.
//!
//! All arithmetic is on integers counted in unit-milliseconds, where one
//! whole unit is [`Carry::DENOMINATOR`] (3 600 000):
//!
//! ```text
//! total     = carry + rate * elapsed_ms
//! inventory = inventory + total / 3_600_000
//! carry     = total % 3_600_000
//! ```
//!
//! Many small advances therefore land on exactly the same inventory and
//! carry as one large advance.
//!
//! A non-positive elapsed time (a repeated call in the same millisecond,
//! or a wall clock that stepped backwards) is a no-op.

use std::collections::BTreeMap;

use nebula_types::{Carry, Galaxy, Planet, ResourceType};
use tracing::debug;

use crate::error::WorldError;

/// Outcome of one accrual pass over a galaxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccrualSummary {
    /// Planets whose resources moved forward.
    pub advanced: usize,
    /// Planets left untouched because no time had elapsed for them.
    pub skipped: usize,
}

/// Add `rate_per_hour` over `elapsed_ms` to a carried fraction.
///
/// Returns the whole units completed and the new carry, or `None` if the
/// unit count does not fit in a `u64`.
pub fn accrue(carry: Carry, rate_per_hour: u32, elapsed_ms: u64) -> Option<(u64, Carry)> {
    let produced = u128::from(rate_per_hour).checked_mul(u128::from(elapsed_ms))?;
    let total = u128::from(carry.numerator()).checked_add(produced)?;
    let denominator = u128::from(Carry::DENOMINATOR);

    let units = u64::try_from(total.checked_div(denominator)?).ok()?;
    let rest = u64::try_from(total.checked_rem(denominator)?).ok()?;
    Some((units, Carry::from_numerator(rest)?))
}

/// Advance a planet's resources to `now_ms`.
///
/// Returns a newly built planet. Resources without a production source
/// (energy, or any resource missing from the source list) keep their
/// inventory and remainder. If `now_ms` is not after the planet's
/// `last_updated_ms`, an unchanged copy is returned.
///
/// # Errors
///
/// Returns [`WorldError::ElapsedOverflow`] if the elapsed time cannot be
/// computed and [`WorldError::ArithmeticOverflow`] if an inventory counter
/// would overflow.
pub fn advance_planet(planet: &Planet, now_ms: i64) -> Result<Planet, WorldError> {
    let elapsed_ms = now_ms
        .checked_sub(planet.last_updated_ms)
        .ok_or(WorldError::ElapsedOverflow {
            from_ms: planet.last_updated_ms,
            to_ms: now_ms,
        })?;

    // Negative or zero elapsed time fails the conversion.
    let Some(elapsed_ms) = u64::try_from(elapsed_ms).ok().filter(|ms| *ms > 0) else {
        return Ok(planet.clone());
    };

    let mut inventory: BTreeMap<ResourceType, u64> = planet.resource_inventory.clone();
    let mut remainder: BTreeMap<ResourceType, Carry> = planet.resource_remainder.clone();

    for source in &planet.resource_sources {
        let overflow = || WorldError::ArithmeticOverflow {
            planet: planet.id.clone(),
            resource: source.resource,
        };

        let carried = remainder
            .get(&source.resource)
            .copied()
            .unwrap_or(Carry::ZERO);
        let (units, carry) = accrue(carried, source.production_rate_per_hour, elapsed_ms)
            .ok_or_else(overflow)?;

        let held = inventory.entry(source.resource).or_insert(0);
        *held = held.checked_add(units).ok_or_else(overflow)?;
        remainder.insert(source.resource, carry);
    }

    Ok(planet.with_resources(inventory, remainder, now_ms))
}

/// Advance every planet of every system to a single `now_ms` snapshot.
///
/// Each planet moves forward relative to its own `last_updated_ms`.
///
/// # Errors
///
/// Propagates the first [`WorldError`] returned by [`advance_planet`].
pub fn advance_galaxy(galaxy: &mut Galaxy, now_ms: i64) -> Result<AccrualSummary, WorldError> {
    let mut summary = AccrualSummary::default();

    for planet in galaxy.planets_mut() {
        if now_ms <= planet.last_updated_ms {
            summary.skipped = summary.skipped.saturating_add(1);
            continue;
        }
        *planet = advance_planet(planet, now_ms)?;
        summary.advanced = summary.advanced.saturating_add(1);
    }

    debug!(
        galaxy_id = %galaxy.id,
        now_ms,
        advanced = summary.advanced,
        skipped = summary.skipped,
        "Accrual pass complete"
    );

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use nebula_types::{
        GalaxyId, OrbitalPosition, PlanetEnvironment, PlanetId, ResourceSource, SolarSystem, Star,
        StarId, StarType, SystemId,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::galaxy::{GalaxyConfig, generate_galaxy};

    const T0: i64 = 1_700_000_000_000;
    const HOUR: i64 = 3_600_000;

    fn make_planet(sources: &[(ResourceType, u32)]) -> Planet {
        Planet {
            id: PlanetId::with_suffix("test0001"),
            name: String::from("Star-TEST-1"),
            position: OrbitalPosition {
                orbital_radius_au: 1.0,
                orbital_period_days: 365.3,
                angle_radians: 0.0,
            },
            environment: PlanetEnvironment {
                gravity: 9.8,
                atmosphere_density: 1.0,
                temperature_kelvin: 288.0,
                habitability_index: 0.5,
            },
            resource_sources: sources
                .iter()
                .map(|&(resource, rate)| ResourceSource {
                    resource,
                    production_rate_per_hour: rate,
                })
                .collect(),
            resource_inventory: Planet::empty_inventory(),
            resource_remainder: Planet::empty_remainder(),
            last_updated_ms: T0,
            is_controlled: true,
        }
    }

    fn carry(numerator: u64) -> Carry {
        Carry::from_numerator(numerator).unwrap()
    }

    #[test]
    fn one_hour_at_3600_yields_exactly_3600() {
        let planet = make_planet(&[(ResourceType::Metal, 3600)]);
        let next = advance_planet(&planet, T0 + HOUR).unwrap();

        assert_eq!(next.inventory(ResourceType::Metal), 3600);
        assert!(next.remainder(ResourceType::Metal).is_zero());
        assert_eq!(next.last_updated_ms, T0 + HOUR);
    }

    #[test]
    fn fractional_production_is_carried() {
        // 100/h over 54 seconds = 1.5 units.
        let planet = make_planet(&[(ResourceType::Research, 100)]);
        let next = advance_planet(&planet, T0 + 54_000).unwrap();
        assert_eq!(next.inventory(ResourceType::Research), 1);
        assert_eq!(next.remainder(ResourceType::Research), carry(1_800_000));

        // Another 54 seconds completes the carried half unit.
        let after = advance_planet(&next, T0 + 108_000).unwrap();
        assert_eq!(after.inventory(ResourceType::Research), 3);
        assert!(after.remainder(ResourceType::Research).is_zero());
    }

    #[test]
    fn chained_thirds_complete_a_whole_unit() {
        // 100/h over 12 s is exactly one third of a unit.
        let planet = make_planet(&[(ResourceType::Research, 100)]);
        let once = advance_planet(&planet, T0 + 36_000).unwrap();

        let mut chained = planet;
        for step in 1..=3 {
            chained = advance_planet(&chained, T0 + step * 12_000).unwrap();
        }

        assert_eq!(once.inventory(ResourceType::Research), 1);
        assert_eq!(chained.inventory(ResourceType::Research), 1);
        assert!(chained.remainder(ResourceType::Research).is_zero());

        let json = serde_json::to_value(&chained).unwrap();
        assert_eq!(json["resourceRemainder"]["research"], 0.0);
    }

    #[test]
    fn starting_remainder_joins_the_total() {
        let mut planet = make_planet(&[(ResourceType::Fuel, 1000)]);
        planet
            .resource_remainder
            .insert(ResourceType::Fuel, carry(2_700_000));
        planet.resource_inventory.insert(ResourceType::Fuel, 10);

        // 1000/h over 900 ms = 0.25 units; 0.75 + 0.25 = 1 whole unit.
        let next = advance_planet(&planet, T0 + 900).unwrap();
        assert_eq!(next.inventory(ResourceType::Fuel), 11);
        assert!(next.remainder(ResourceType::Fuel).is_zero());
    }

    #[test]
    fn non_positive_elapsed_is_noop() {
        let mut planet = make_planet(&[(ResourceType::Metal, 3600)]);
        planet
            .resource_remainder
            .insert(ResourceType::Metal, carry(1_080_000));
        planet.resource_inventory.insert(ResourceType::Metal, 7);

        for now in [T0, T0 - 1, T0 - HOUR] {
            let next = advance_planet(&planet, now).unwrap();
            assert_eq!(next, planet);
        }
    }

    #[test]
    fn resources_without_source_are_untouched() {
        let mut planet = make_planet(&[(ResourceType::Metal, 3600)]);
        planet.resource_inventory.insert(ResourceType::Energy, 42);
        planet
            .resource_remainder
            .insert(ResourceType::Fuel, carry(3_240_000));

        let next = advance_planet(&planet, T0 + 10 * HOUR).unwrap();
        assert_eq!(next.inventory(ResourceType::Energy), 42);
        assert_eq!(next.inventory(ResourceType::Fuel), 0);
        assert_eq!(next.remainder(ResourceType::Fuel), carry(3_240_000));
        assert_eq!(next.inventory(ResourceType::Metal), 36_000);
    }

    #[test]
    fn chained_halves_match_single_advance() {
        let rates = [
            (ResourceType::Metal, 3_713),
            (ResourceType::Minerals, 4_417),
            (ResourceType::Fuel, 1_031),
            (ResourceType::Research, 97),
        ];
        let planet = make_planet(&rates);
        let delta = 7 * HOUR / 3 + 11;

        let once = advance_planet(&planet, T0 + delta).unwrap();
        let half = advance_planet(&planet, T0 + delta / 2).unwrap();
        let twice = advance_planet(&half, T0 + delta).unwrap();

        for (resource, _) in rates {
            assert_eq!(once.inventory(resource), twice.inventory(resource));
            assert_eq!(once.remainder(resource), twice.remainder(resource));
        }
    }

    #[test]
    fn many_small_steps_match_one_large_step() {
        let planet = make_planet(&[(ResourceType::Minerals, 4_001), (ResourceType::Research, 7)]);
        let mut stepped = planet.clone();
        for step in 1..=1_000 {
            stepped = advance_planet(&stepped, T0 + step * 1_237).unwrap();
        }
        let once = advance_planet(&planet, T0 + 1_000 * 1_237).unwrap();

        assert_eq!(once.resource_inventory, stepped.resource_inventory);
        assert_eq!(once.resource_remainder, stepped.resource_remainder);
    }

    #[test]
    fn remainder_always_in_unit_interval() {
        let mut current = make_planet(&[(ResourceType::Metal, 3_599), (ResourceType::Research, 1)]);
        for step in 1..=200_i64 {
            current = advance_planet(&current, T0 + step * step * 97).unwrap();
            for resource in ResourceType::ALL {
                let r = current.remainder(resource);
                assert!(r.numerator() < Carry::DENOMINATOR, "{resource:?} remainder {r:?}");
                assert!(r.as_f64() < 1.0);
            }
        }
    }

    #[test]
    fn advance_does_not_alias_input_maps() {
        let planet = make_planet(&[(ResourceType::Metal, 3600)]);
        let next = advance_planet(&planet, T0 + HOUR).unwrap();
        assert_eq!(next.inventory(ResourceType::Metal), 3600);
        assert_eq!(planet.inventory(ResourceType::Metal), 0);
        assert_eq!(planet.last_updated_ms, T0);
    }

    #[test]
    fn accrue_is_exact_for_whole_hours() {
        assert_eq!(accrue(Carry::ZERO, 4000, 3 * 3_600_000), Some((12_000, Carry::ZERO)));
        assert_eq!(accrue(Carry::ZERO, 0, 3_600_000), Some((0, Carry::ZERO)));
    }

    #[test]
    fn inventory_overflow_is_an_error() {
        let mut planet = make_planet(&[(ResourceType::Metal, 3600)]);
        planet.resource_inventory.insert(ResourceType::Metal, u64::MAX);
        let result = advance_planet(&planet, T0 + HOUR);
        assert!(matches!(result, Err(WorldError::ArithmeticOverflow { .. })));
    }

    #[test]
    fn elapsed_overflow_is_an_error() {
        let mut planet = make_planet(&[(ResourceType::Metal, 3600)]);
        planet.last_updated_ms = i64::MIN;
        let result = advance_planet(&planet, i64::MAX);
        assert!(matches!(result, Err(WorldError::ElapsedOverflow { .. })));
    }

    fn two_planet_galaxy() -> Galaxy {
        let mut outer = make_planet(&[(ResourceType::Metal, 3600)]);
        outer.id = PlanetId::with_suffix("test0002");
        outer.is_controlled = false;
        outer.last_updated_ms = T0 + HOUR;

        Galaxy {
            id: GalaxyId::with_suffix("test"),
            name: String::from("Galaxy-TEST"),
            solar_systems: vec![SolarSystem {
                id: SystemId::with_suffix("test"),
                name: String::from("Star-TEST System"),
                star: Star {
                    id: StarId::with_suffix("test"),
                    name: String::from("Star-TEST"),
                    star_type: StarType::K,
                    mass_solar: 0.8,
                    radius_solar: 0.84,
                    luminosity_solar: 0.46,
                    planets: vec![make_planet(&[(ResourceType::Metal, 3600)]), outer],
                    anomalies: Vec::new(),
                    asteroid_belts: Vec::new(),
                },
            }],
        }
    }

    #[test]
    fn galaxy_pass_uses_one_snapshot_per_planet_baseline() {
        let mut galaxy = two_planet_galaxy();
        let summary = advance_galaxy(&mut galaxy, T0 + 2 * HOUR).unwrap();
        assert_eq!(summary, AccrualSummary { advanced: 2, skipped: 0 });

        let inventories: Vec<u64> = galaxy
            .planets()
            .map(|p| p.inventory(ResourceType::Metal))
            .collect();
        // First planet accrues two hours, the second only one.
        assert_eq!(inventories, vec![7200, 3600]);
        assert!(galaxy.planets().all(|p| p.last_updated_ms == T0 + 2 * HOUR));
    }

    #[test]
    fn galaxy_pass_skips_planets_not_yet_due() {
        let mut galaxy = two_planet_galaxy();
        let summary = advance_galaxy(&mut galaxy, T0 + HOUR / 2).unwrap();
        assert_eq!(summary, AccrualSummary { advanced: 1, skipped: 1 });
    }

    #[test]
    fn repeated_pass_at_same_instant_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(61);
        let mut galaxy = generate_galaxy(GalaxyConfig::default(), &mut rng, T0);

        advance_galaxy(&mut galaxy, T0 + 5 * HOUR).unwrap();
        let snapshot = galaxy.clone();

        let second = advance_galaxy(&mut galaxy, T0 + 5 * HOUR).unwrap();
        assert_eq!(second.advanced, 0);
        assert_eq!(galaxy, snapshot);
    }

    #[test]
    fn generated_galaxy_accrues_every_source() {
        let mut rng = SmallRng::seed_from_u64(62);
        let mut galaxy = generate_galaxy(GalaxyConfig::new(2).unwrap(), &mut rng, T0);
        advance_galaxy(&mut galaxy, T0 + HOUR).unwrap();

        for planet in galaxy.planets() {
            for source in &planet.resource_sources {
                // Integer rates over exactly one hour produce whole units.
                assert_eq!(
                    planet.inventory(source.resource),
                    u64::from(source.production_rate_per_hour)
                );
                assert!(planet.remainder(source.resource).is_zero());
            }
            assert_eq!(planet.inventory(ResourceType::Energy), 0);
        }
    }
}
