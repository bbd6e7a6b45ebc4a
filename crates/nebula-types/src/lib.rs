//! Shared type definitions for the Nebula galaxy dashboard.
//!
//! This crate is the single source of truth for the galaxy data model
//! served to the browser dashboard. Types flow downstream to `TypeScript`
//! via `ts-rs`.
//!
//! # Modules
//!
//! - [`carry`] -- Exact fractional carry of produced resources
//! - [`ids`] -- Prefixed, type-safe identifiers for every entity
//! - [`enums`] -- Resources, spectral types, anomaly kinds, belt richness
//! - [`structs`] -- Galaxy, systems, stars, planets and their parts

pub mod carry;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use carry::Carry;
pub use enums::{AnomalyType, BeltRichness, ResourceType, StarType};
pub use ids::{AnomalyId, BeltId, GalaxyId, PlanetId, StarId, SystemId};
pub use structs::{
    AnomalyImpact, AsteroidBelt, Galaxy, OrbitalPosition, Planet, PlanetEnvironment,
    ResourceSource, SolarSystem, Star, StarAnomaly,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the dashboard.

    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::GalaxyId::export_all();
        let _ = crate::ids::SystemId::export_all();
        let _ = crate::ids::StarId::export_all();
        let _ = crate::ids::PlanetId::export_all();
        let _ = crate::ids::AnomalyId::export_all();
        let _ = crate::ids::BeltId::export_all();

        // Enums
        let _ = crate::enums::ResourceType::export_all();
        let _ = crate::enums::StarType::export_all();
        let _ = crate::enums::AnomalyType::export_all();
        let _ = crate::enums::BeltRichness::export_all();

        // Structs
        let _ = crate::structs::Galaxy::export_all();
        let _ = crate::structs::SolarSystem::export_all();
        let _ = crate::structs::Star::export_all();
        let _ = crate::structs::StarAnomaly::export_all();
        let _ = crate::structs::AnomalyImpact::export_all();
        let _ = crate::structs::AsteroidBelt::export_all();
        let _ = crate::structs::OrbitalPosition::export_all();
        let _ = crate::structs::PlanetEnvironment::export_all();
        let _ = crate::structs::ResourceSource::export_all();
        let _ = crate::structs::Planet::export_all();
    }
}
