//! Core entity structs for the galaxy data model.
//!
//! A [`Galaxy`] owns its whole subtree by value. Only the resource
//! inventory, resource remainder and `last_updated_ms` of a [`Planet`]
//! change after generation, and those are replaced by building a new
//! planet value rather than mutating the old one in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::carry::Carry;
use crate::enums::{AnomalyType, BeltRichness, ResourceType, StarType};
use crate::ids::{AnomalyId, BeltId, GalaxyId, PlanetId, StarId, SystemId};

// ---------------------------------------------------------------------------
// Galaxy
// ---------------------------------------------------------------------------

/// A procedurally generated galaxy: an ordered list of solar systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Galaxy {
    /// Galaxy identifier.
    pub id: GalaxyId,
    /// Display name, e.g. `Galaxy-4QZ7A`.
    pub name: String,
    /// Solar systems in generation order.
    pub solar_systems: Vec<SolarSystem>,
}

impl Galaxy {
    /// Iterate over every planet of every system, in generation order.
    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.solar_systems
            .iter()
            .flat_map(|system| system.star.planets.iter())
    }

    /// Mutable iteration over every planet of every system.
    pub fn planets_mut(&mut self) -> impl Iterator<Item = &mut Planet> {
        self.solar_systems
            .iter_mut()
            .flat_map(|system| system.star.planets.iter_mut())
    }

    /// Total number of planets in the galaxy.
    pub fn planet_count(&self) -> usize {
        self.solar_systems
            .iter()
            .map(|system| system.star.planets.len())
            .sum()
    }

    /// The planet owned by the player, if the galaxy has any planets.
    pub fn controlled_planet(&self) -> Option<&Planet> {
        self.planets().find(|planet| planet.is_controlled)
    }

    /// Look up a planet by identifier.
    pub fn find_planet(&self, id: &PlanetId) -> Option<&Planet> {
        self.planets().find(|planet| &planet.id == id)
    }
}

/// A solar system wrapping exactly one star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SolarSystem {
    /// System identifier.
    pub id: SystemId,
    /// Display name, `"{star name} System"`.
    pub name: String,
    /// The central star and everything orbiting it.
    pub star: Star,
}

// ---------------------------------------------------------------------------
// Star
// ---------------------------------------------------------------------------

/// A star with its planets, anomalies and asteroid belts.
///
/// Mass, radius and luminosity are in solar units and rounded to two
/// decimals at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Star {
    /// Star identifier.
    pub id: StarId,
    /// Display name, e.g. `Star-K2P9`.
    pub name: String,
    /// Spectral class.
    #[serde(rename = "type")]
    pub star_type: StarType,
    /// Mass in solar masses.
    pub mass_solar: f64,
    /// Radius in solar radii.
    pub radius_solar: f64,
    /// Luminosity in solar luminosities.
    pub luminosity_solar: f64,
    /// Planets ordered from the innermost generated slot outwards.
    pub planets: Vec<Planet>,
    /// Zero or one anomaly.
    pub anomalies: Vec<StarAnomaly>,
    /// Zero to two asteroid belts.
    pub asteroid_belts: Vec<AsteroidBelt>,
}

/// An anomaly attached to a star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StarAnomaly {
    /// Anomaly identifier.
    pub id: AnomalyId,
    /// Anomaly kind.
    #[serde(rename = "type")]
    pub anomaly_type: AnomalyType,
    /// Fixed flavour text for the kind.
    pub description: String,
    /// Economic impact of the anomaly.
    pub impact: AnomalyImpact,
}

/// Resource bias and multiplier of a [`StarAnomaly`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AnomalyImpact {
    /// Resource the anomaly biases, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub resource: Option<ResourceType>,
    /// Multiplier, rounded to two decimals.
    pub modifier: f64,
}

/// An asteroid belt orbiting a star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AsteroidBelt {
    /// Belt identifier.
    pub id: BeltId,
    /// Display name, e.g. `Belt-7QX`.
    pub name: String,
    /// Richness tier.
    pub richness: BeltRichness,
    /// Metal or minerals.
    pub primary_resource: ResourceType,
    /// Whole units yielded per hour.
    pub yield_per_hour: u32,
}

// ---------------------------------------------------------------------------
// Planet
// ---------------------------------------------------------------------------

/// Where a planet sits on its orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OrbitalPosition {
    /// Semi-major axis in astronomical units, at most 5.
    #[serde(rename = "orbitalRadiusAU")]
    pub orbital_radius_au: f64,
    /// Orbital period in days, `radius^1.5 * 365.25`.
    #[serde(rename = "orbitalPeriodDays")]
    pub orbital_period_days: f64,
    /// Current angle on the orbit in `[0, 2π)`.
    #[serde(rename = "angleRadians")]
    pub angle_radians: f64,
}

/// Independently randomized surface conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlanetEnvironment {
    /// Surface gravity in m/s².
    pub gravity: f64,
    /// Atmosphere density relative to Earth.
    pub atmosphere_density: f64,
    /// Mean surface temperature in Kelvin.
    pub temperature_kelvin: f64,
    /// Habitability index in `[0.1, 0.95]`.
    pub habitability_index: f64,
}

/// A planetary production source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ResourceSource {
    /// Resource produced.
    #[serde(rename = "type")]
    pub resource: ResourceType,
    /// Units produced per hour.
    pub production_rate_per_hour: u32,
}

/// A planet with its production sources and accrued resources.
///
/// `resource_inventory` holds whole units and `resource_remainder` the
/// fractional carry in `[0, 1)`. Both maps always contain every
/// [`ResourceType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Planet {
    /// Planet identifier.
    pub id: PlanetId,
    /// Display name, `"{star name}-{n}"` with `n` starting at 1.
    pub name: String,
    /// Orbit.
    pub position: OrbitalPosition,
    /// Surface conditions.
    pub environment: PlanetEnvironment,
    /// One source per planet-eligible resource.
    pub resource_sources: Vec<ResourceSource>,
    /// Accumulated whole units per resource.
    #[ts(type = "Record<string, number>")]
    pub resource_inventory: BTreeMap<ResourceType, u64>,
    /// Fractional carry per resource.
    #[ts(type = "Record<string, number>")]
    pub resource_remainder: BTreeMap<ResourceType, Carry>,
    /// Instant of the last accrual, in milliseconds since the Unix epoch.
    #[ts(type = "number")]
    pub last_updated_ms: i64,
    /// Whether the player controls this planet.
    pub is_controlled: bool,
}

impl Planet {
    /// An inventory with zero units of every resource.
    pub fn empty_inventory() -> BTreeMap<ResourceType, u64> {
        ResourceType::ALL.into_iter().map(|r| (r, 0)).collect()
    }

    /// A remainder map with zero carry for every resource.
    pub fn empty_remainder() -> BTreeMap<ResourceType, Carry> {
        ResourceType::ALL
            .into_iter()
            .map(|r| (r, Carry::ZERO))
            .collect()
    }

    /// Whole units of `resource` held.
    pub fn inventory(&self, resource: ResourceType) -> u64 {
        self.resource_inventory.get(&resource).copied().unwrap_or(0)
    }

    /// Fractional carry of `resource`.
    pub fn remainder(&self, resource: ResourceType) -> Carry {
        self.resource_remainder
            .get(&resource)
            .copied()
            .unwrap_or(Carry::ZERO)
    }

    /// Hourly production rate of `resource`, if the planet has a source.
    pub fn production_rate(&self, resource: ResourceType) -> Option<u32> {
        self.resource_sources
            .iter()
            .find(|source| source.resource == resource)
            .map(|source| source.production_rate_per_hour)
    }

    /// Build a new planet that shares this planet's structure but carries
    /// the given resource state.
    ///
    /// Every field is copied explicitly so the returned value never
    /// aliases the maps of `self`.
    pub fn with_resources(
        &self,
        resource_inventory: BTreeMap<ResourceType, u64>,
        resource_remainder: BTreeMap<ResourceType, Carry>,
        last_updated_ms: i64,
    ) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            position: self.position,
            environment: self.environment,
            resource_sources: self.resource_sources.clone(),
            resource_inventory,
            resource_remainder,
            last_updated_ms,
            is_controlled: self.is_controlled,
        }
    }
}
